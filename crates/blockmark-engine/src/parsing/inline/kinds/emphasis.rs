//! Emphasis, strong emphasis and strikethrough.
//!
//! `*a*` / `_a_` is `Emph`, `**a**` is `Strong`, `***a***` is `Strong`
//! wrapping `Emph`, and `~~a~~` is `Del`. Whitespace may not follow an
//! opener or precede a closer.

use crate::parsing::{
    Extensions, NodeId, NodeType, Parser,
    inline::{is_punct, is_space},
};

pub(crate) fn emphasis(p: &mut Parser, data: &[u8], offset: usize) -> (usize, Option<NodeId>) {
    let data = &data[offset..];
    let c = data[0];

    if data.len() > 2 && data[1] != c {
        // `~` only comes in pairs
        if c == b'~' || is_space(data[1]) {
            return (0, None);
        }
        return wrap(1, p.emph_single(&data[1..], c, 0));
    }

    if data.len() > 3 && data[1] == c && data[2] != c {
        if is_space(data[2]) {
            return (0, None);
        }
        return wrap(2, p.emph_double(&data[2..], c));
    }

    if data.len() > 4 && data[1] == c && data[2] == c && data[3] != c {
        if c == b'~' || is_space(data[3]) {
            return (0, None);
        }
        return wrap(3, p.emph_triple(data, c));
    }

    (0, None)
}

fn wrap(opener: usize, (consumed, node): (usize, Option<NodeId>)) -> (usize, Option<NodeId>) {
    match node {
        Some(node) => (consumed + opener, Some(node)),
        None => (0, None),
    }
}

/// Index of the next `c` in `data` that is not backslash-escaped.
pub fn find_emph_char(data: &[u8], c: u8) -> Option<usize> {
    let mut i = 0;
    while i < data.len() {
        if data[i] == b'\\' {
            i += 2;
            continue;
        }
        if data[i] == c {
            return Some(i);
        }
        i += 1;
    }
    None
}

impl Parser {
    /// `data` starts right after a single opener. `start` skips bytes that
    /// belong to an inner opener.
    fn emph_single(&mut self, data: &[u8], c: u8, start: usize) -> (usize, Option<NodeId>) {
        let no_intra = self.extensions.contains(Extensions::NO_INTRA_EMPHASIS);
        let mut i = start;
        while i < data.len() {
            let Some(len) = find_emph_char(&data[i..], c) else {
                break;
            };
            i += len;

            // a doubled marker belongs to nested strong emphasis
            if data.get(i + 1) == Some(&c) {
                i += 2;
                continue;
            }
            if i == 0 || is_space(data[i - 1]) {
                i += 1;
                continue;
            }
            if no_intra && !data.get(i + 1).is_none_or(|&b| is_space(b) || is_punct(b)) {
                i += 1;
                continue;
            }

            let node = self.tree.create_node(NodeType::Emph);
            self.inline(node, &data[..i]);
            return (i + 1, Some(node));
        }
        (0, None)
    }

    /// `data` starts right after a double opener.
    fn emph_double(&mut self, data: &[u8], c: u8) -> (usize, Option<NodeId>) {
        let mut i = 0;
        while i < data.len() {
            let Some(len) = find_emph_char(&data[i..], c) else {
                break;
            };
            i += len;

            if i > 0 && data.get(i + 1) == Some(&c) && !is_space(data[i - 1]) {
                let node_type = if c == b'~' {
                    NodeType::Del
                } else {
                    NodeType::Strong
                };
                let node = self.tree.create_node(node_type);
                self.inline(node, &data[..i]);
                return (i + 2, Some(node));
            }
            i += 1;
        }
        (0, None)
    }

    /// `data` starts at the first of three openers. Returns the bytes
    /// consumed after the openers.
    fn emph_triple(&mut self, data: &[u8], c: u8) -> (usize, Option<NodeId>) {
        let inner = &data[3..];
        let mut i = 0;
        while i < inner.len() {
            let Some(len) = find_emph_char(&inner[i..], c) else {
                break;
            };
            i += len;

            if i == 0 || is_space(inner[i - 1]) {
                i += 1;
                continue;
            }

            let run = inner[i..].iter().take(3).take_while(|&&b| b == c).count();
            return match run {
                3 => {
                    let strong = self.tree.create_node(NodeType::Strong);
                    let emph = self.tree.create_node(NodeType::Emph);
                    self.tree.push_child(strong, emph);
                    self.inline(emph, &inner[..i]);
                    (i + 3, Some(strong))
                }
                // `***a** b*`: emphasis around strong
                2 => {
                    let (consumed, node) = self.emph_single(&data[1..], c, 2);
                    (consumed.saturating_sub(2), node)
                }
                // `***a* b**`: strong around emphasis
                _ => {
                    let (consumed, node) = self.emph_double(&data[2..], c);
                    (consumed.saturating_sub(1), node)
                }
            };
        }
        (0, None)
    }
}
