//! # Inline Kinds
//!
//! One module per handler family. Each handler has the
//! [`InlineHandler`](super::InlineHandler) signature and is registered in
//! the dispatch table under its trigger bytes.
//!
//! - **`emphasis`**: `*`, `_`, `~`
//! - **`link`**: `[text](destination "title")`
//! - **`autolink`**: bare `http://`, `https://`, `ftp://`, `mailto:` URLs
//! - **`escape`**: backslash escapes
//! - **`entity`**: `&name;` character references
//! - **`line_break`**: hard breaks

pub mod autolink;
pub mod emphasis;
pub mod entity;
pub mod escape;
pub mod line_break;
pub mod link;
