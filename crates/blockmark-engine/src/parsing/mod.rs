//! # Parsing
//!
//! Two-phase pipeline: a block pass builds the container tree from raw bytes,
//! then an inline pass replaces the raw content of every paragraph and table
//! cell with inline child nodes.
//!
//! ## Modules
//!
//! - **`tree`**: arena-backed [`Tree`] of [`Node`](tree::Node)s, walk support
//! - **`blocks`**: tip tracker, line recognizers, and the per-kind block parsers
//! - **`inline`**: byte-dispatched inline engine
//! - **`options`**: [`Options`] and the [`Extensions`] flag set
//! - **`snapshot`**: normalized tree outlines and invariant checks for tests
//!
//! ## Key Invariants
//!
//! - There is exactly one open path from the document to the tip.
//! - A node only receives block children while it is open.
//! - Block and inline recursion share one depth counter bounded by
//!   [`Options::max_nesting`].

pub mod blocks;
pub mod inline;
pub mod options;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use inline::InlineTable;
pub use options::{DEFAULT_MAX_NESTING, Extensions, Options};
pub use tree::{NodeId, NodeType, Tree, WalkStatus};

/// Mutable state threaded through every block and inline routine of one parse.
#[derive(Debug, Clone)]
pub struct ParseState {
    /// Root of the tree being built.
    pub(crate) doc: NodeId,
    /// Innermost open node; new blocks are appended here.
    pub(crate) tip: NodeId,
    /// Tip as it stood when the current block construct started.
    pub(crate) old_tip: NodeId,
    /// Deepest container the current construct still belongs to.
    pub(crate) last_matched_container: NodeId,
    /// Set once the unmatched suffix of the open path has been closed for
    /// the current construct.
    pub(crate) all_closed: bool,
    pub(crate) nesting: usize,
    pub(crate) max_nesting: usize,
    /// Suppresses link recognition while parsing link text.
    pub(crate) inside_link: bool,
}

impl ParseState {
    pub fn new(doc: NodeId, max_nesting: usize) -> Self {
        Self {
            doc,
            tip: doc,
            old_tip: doc,
            last_matched_container: doc,
            all_closed: true,
            nesting: 0,
            max_nesting,
            inside_link: false,
        }
    }

    /// Enters one recursion level. Returns false, without changing the
    /// counter, when the bound has been reached.
    pub fn enter(&mut self) -> bool {
        if self.nesting >= self.max_nesting {
            return false;
        }
        self.nesting += 1;
        true
    }

    pub fn leave(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    pub fn nesting(&self) -> usize {
        self.nesting
    }

    pub fn tip(&self) -> NodeId {
        self.tip
    }
}

/// A single-use markdown processor.
///
/// [`Parser::parse`] consumes the parser, so the state of one parse can
/// never leak into another.
pub struct Parser {
    pub(crate) tree: Tree,
    pub(crate) state: ParseState,
    pub(crate) extensions: Extensions,
    pub(crate) inline_callbacks: InlineTable,
}

impl Parser {
    pub fn new(options: Options) -> Self {
        let tree = Tree::new();
        let state = ParseState::new(tree.root(), options.max_nesting);
        Self {
            tree,
            state,
            extensions: options.extensions,
            inline_callbacks: inline::callbacks(options.extensions),
        }
    }

    pub fn extensions(&self) -> Extensions {
        self.extensions
    }

    /// Parses `input` into a finished document tree.
    ///
    /// Runs the block pass over the whole input, closes every container
    /// still open, then resolves the raw text of each paragraph and table
    /// cell into inline nodes.
    pub fn parse(mut self, input: &[u8]) -> Tree {
        log::debug!("parsing {} bytes", input.len());

        let input = terminated(input);
        self.block(&input);

        let doc = self.state.doc;
        self.finalize(doc);

        self.inline_pass();
        log::debug!("parse finished with {} nodes", self.tree.len());
        self.tree
    }

    fn inline_pass(&mut self) {
        let mut leaves = Vec::new();
        let tree = &self.tree;
        tree.walk(tree.root(), |id, entering| {
            let node = &tree[id];
            if entering && node.node_type.takes_inline() && !node.content.is_empty() {
                leaves.push(id);
            }
            WalkStatus::GoToNext
        });
        log::trace!("inline pass over {} leaf blocks", leaves.len());

        for id in leaves {
            let content = std::mem::take(&mut self.tree[id].content);
            self.inline(id, &content);
        }
    }
}

/// Block parsing assumes every line, the last included, ends in `\n`.
fn terminated(input: &[u8]) -> Cow<'_, [u8]> {
    match input.last() {
        Some(b'\n') | None => Cow::Borrowed(input),
        Some(_) => {
            let mut owned = Vec::with_capacity(input.len() + 1);
            owned.extend_from_slice(input);
            owned.push(b'\n');
            Cow::Owned(owned)
        }
    }
}

/// Parses `input` with a fresh [`Parser`].
pub fn parse_document(input: &[u8], options: &Options) -> Tree {
    Parser::new(options.clone()).parse(input)
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn nesting_guard_stops_at_bound() {
        let mut state = ParseState::new(Tree::new().root(), 2);
        assert!(state.enter());
        assert!(state.enter());
        assert!(!state.enter());
        assert_eq!(state.nesting(), 2);
        state.leave();
        assert!(state.enter());
    }

    #[test]
    fn leave_never_underflows() {
        let mut state = ParseState::new(Tree::new().root(), 16);
        state.leave();
        assert_eq!(state.nesting(), 0);
    }

    #[test]
    fn terminated_appends_newline_once() {
        assert_eq!(&*terminated(b"a"), b"a\n");
        assert_eq!(&*terminated(b"a\n"), b"a\n");
        assert_eq!(&*terminated(b""), b"");
    }
}
