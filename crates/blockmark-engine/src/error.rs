use thiserror::Error;

use crate::parsing::tree::TreeError;

/// Errors surfaced by the engine's fallible entry points.
///
/// Parsing itself never fails: malformed constructs fall back to
/// paragraphs. Only writing output and checked tree edits can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write rendered output: {0}")]
    Render(#[from] std::io::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),
}
