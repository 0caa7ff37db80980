//! # Inline Parsing
//!
//! Byte-dispatched inline engine run over the raw content of every
//! paragraph and table cell once block parsing is done.
//!
//! ## Architecture
//!
//! A 256-entry table maps trigger bytes to handlers. The engine scans the
//! content left to right; bytes without a handler, and bytes whose handler
//! declines, accumulate into `Text` runs. A handler that matches reports how
//! many bytes it consumed and may return a new node, which is appended after
//! the pending text.
//!
//! Handlers are registered per [`Extensions`]: autolink triggers only exist
//! when `AUTOLINK` is set, `~` only with `STRIKETHROUGH`, and so on.
//!
//! ## Modules
//!
//! - **`kinds`**: one module per handler family (emphasis, links, escapes,
//!   entities, line breaks)
//!
//! Emphasis and link text are parsed recursively through [`Parser::inline`],
//! sharing the block parser's nesting bound.

pub mod kinds;

use crate::parsing::{Extensions, NodeId, NodeType, Parser};

use kinds::{autolink, emphasis, entity, escape, line_break, link};

/// Inline trigger handler. Receives the whole content and the offset of the
/// trigger byte; returns the bytes consumed from that offset (0 to decline)
/// and the node to append, if any.
pub(crate) type InlineHandler = fn(&mut Parser, &[u8], usize) -> (usize, Option<NodeId>);

pub(crate) type InlineTable = [Option<InlineHandler>; 256];

/// Builds the dispatch table for `extensions`.
pub(crate) fn callbacks(extensions: Extensions) -> InlineTable {
    let mut table: InlineTable = [None; 256];
    table[b' ' as usize] = Some(line_break::maybe_line_break);
    table[b'*' as usize] = Some(emphasis::emphasis);
    table[b'_' as usize] = Some(emphasis::emphasis);
    if extensions.contains(Extensions::STRIKETHROUGH) {
        table[b'~' as usize] = Some(emphasis::emphasis);
    }
    if extensions.contains(Extensions::HARD_LINE_BREAK) {
        table[b'\n' as usize] = Some(line_break::line_break);
    }
    table[b'[' as usize] = Some(link::link);
    table[b'\\' as usize] = Some(escape::escape);
    table[b'&' as usize] = Some(entity::entity);
    if extensions.contains(Extensions::AUTOLINK) {
        for c in autolink::TRIGGERS {
            table[c as usize] = Some(autolink::autolink);
        }
    }
    table
}

impl Parser {
    /// Parses `data` into inline children of `block`.
    pub(crate) fn inline(&mut self, block: NodeId, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        if !self.state.enter() {
            log::debug!("nesting limit reached in inline content");
            return;
        }

        let mut beg = 0;
        let mut end = 0;
        while end < data.len() {
            let Some(handler) = self.inline_callbacks[data[end] as usize] else {
                end += 1;
                continue;
            };
            let (consumed, node) = handler(self, data, end);
            if consumed == 0 {
                end += 1;
                continue;
            }
            self.push_text(block, &data[beg..end]);
            if let Some(node) = node {
                self.tree.push_child(block, node);
            }
            beg = end + consumed;
            end = beg;
        }

        if beg < data.len() {
            let mut end = data.len();
            if data[end - 1] == b'\n' {
                end -= 1;
            }
            self.push_text(block, &data[beg..end]);
        }

        self.state.leave();
    }

    /// Creates a detached `Text` node.
    pub(crate) fn text(&mut self, literal: &[u8]) -> NodeId {
        let node = self.tree.create_node(NodeType::Text);
        self.tree[node].literal = literal.to_vec();
        node
    }

    fn push_text(&mut self, block: NodeId, literal: &[u8]) {
        if literal.is_empty() {
            return;
        }
        let node = self.text(literal);
        self.tree.push_child(block, node);
    }
}

pub(crate) fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

pub(crate) fn is_punct(c: u8) -> bool {
    c.is_ascii_punctuation()
}
