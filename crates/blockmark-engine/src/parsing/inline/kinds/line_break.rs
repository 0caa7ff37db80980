use crate::parsing::{NodeId, NodeType, Parser, blocks::classify::skip_char};

/// Two or more spaces before a newline make a hard break. Fewer spaces are
/// dropped and the newline stays text.
pub(crate) fn maybe_line_break(
    p: &mut Parser,
    data: &[u8],
    offset: usize,
) -> (usize, Option<NodeId>) {
    let end = skip_char(data, offset, b' ');
    if data.get(end) != Some(&b'\n') {
        return (0, None);
    }
    let spaces = end - offset;
    if spaces >= 2 && end + 1 < data.len() {
        return (spaces + 1, Some(p.tree.create_node(NodeType::Hardbreak)));
    }
    (spaces, None)
}

/// Every newline but the last one is a hard break (`HARD_LINE_BREAK`).
pub(crate) fn line_break(p: &mut Parser, data: &[u8], offset: usize) -> (usize, Option<NodeId>) {
    if offset + 1 >= data.len() {
        return (0, None);
    }
    (1, Some(p.tree.create_node(NodeType::Hardbreak)))
}
