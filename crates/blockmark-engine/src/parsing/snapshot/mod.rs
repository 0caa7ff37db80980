//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed [`Tree`](crate::parsing::Tree) to a stable,
//!   serializable `Snap` outline for `insta` snapshot testing
//! - **`invariants`**: Structural checks every finished tree must pass (link
//!   consistency, the containment rule, closed blocks, empty raw content after
//!   the inline pass)
//!
//! ## Testing Strategy
//!
//! Parser tests snapshot the normalized outline, not rendered output.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
