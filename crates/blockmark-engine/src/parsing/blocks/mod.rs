//! # Block Parsing
//!
//! A single dispatch loop walks the remaining input one construct at a time.
//! On each iteration the line recognizers are probed in a fixed priority
//! order and the first match hands the input to its block parser, which
//! builds its subtree through the tip tracker and reports how many bytes it
//! consumed. Anything unrecognized is a paragraph.
//!
//! Priority: blank line, horizontal rule, block quote, table (`TABLES`),
//! unordered list, ordered list, definition list (`DEFINITION_LISTS`),
//! paragraph.
//!
//! ## Modules
//!
//! - **`classify`**: pure line recognizers (`is_empty`, `is_hrule`, prefixes)
//! - **`tip`**: tip tracker (`add_block`, `finalize`, `close_unmatched_blocks`)
//! - **`kinds`**: one parser per block kind (quote, list, table, paragraph)
//!
//! Block quotes and list items re-parse their de-prefixed text through this
//! same loop one nesting level deeper. Past [`Options::max_nesting`] the
//! loop returns without consuming its input, so that text is left out of
//! the tree.
//!
//! [`Options::max_nesting`]: crate::parsing::Options::max_nesting

pub mod classify;
pub mod kinds;
pub mod tip;

use crate::parsing::{Extensions, NodeType, Parser, tree::ListFlags};

use classify::{dli_prefix, is_empty, is_hrule, oli_prefix, quote_prefix, uli_prefix};

impl Parser {
    /// Parses a run of block-level input. `data` must end with a newline.
    pub(crate) fn block(&mut self, mut data: &[u8]) {
        if !self.state.enter() {
            log::debug!(
                "nesting limit {} reached, skipping {} bytes",
                self.state.max_nesting,
                data.len()
            );
            return;
        }

        let container = self.block_container();
        while !data.is_empty() {
            self.begin_construct(container);
            let mut consumed = self.block_step(data);
            if consumed == 0 {
                consumed = classify::next_line(data, 0);
                log::warn!("no block recognized, skipping {consumed} bytes");
            }
            data = &data[consumed.min(data.len())..];
        }

        self.state.leave();
    }

    /// Parses one construct at the start of `data`, returning the bytes consumed.
    fn block_step(&mut self, data: &[u8]) -> usize {
        let n = is_empty(data);
        if n > 0 {
            return n;
        }

        if is_hrule(data) {
            self.add_block(NodeType::HorizontalRule, b"");
            return data.iter().position(|&b| b == b'\n').unwrap_or(data.len());
        }

        if quote_prefix(data) > 0 {
            return self.quote(data);
        }

        if self.extensions.contains(Extensions::TABLES) {
            let n = self.table(data);
            if n > 0 {
                return n;
            }
        }

        if uli_prefix(data) > 0 {
            return self.list(data, ListFlags::empty());
        }

        if oli_prefix(data) > 0 {
            return self.list(data, ListFlags::ORDERED);
        }

        if self.extensions.contains(Extensions::DEFINITION_LISTS) && dli_prefix(data) > 0 {
            return self.list(data, ListFlags::DEFINITION);
        }

        self.paragraph(data)
    }
}
