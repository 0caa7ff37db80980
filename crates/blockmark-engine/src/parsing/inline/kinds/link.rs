use crate::parsing::{
    NodeId, NodeType, Parser,
    inline::{is_space, kinds::escape::unescape},
};

/// Link syntax.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';

    /// Index of the `]` closing the `[` at 0, honouring nested brackets and
    /// backslash escapes.
    pub fn text_end(data: &[u8]) -> Option<usize> {
        let mut level = 0;
        let mut i = 0;
        while i < data.len() {
            match data[i] {
                b'\\' => i += 1,
                Self::OPEN => level += 1,
                Self::CLOSE => {
                    level -= 1;
                    if level == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Index of the `)` closing the `(` at 0, allowing balanced parentheses
    /// inside the destination.
    pub fn destination_end(data: &[u8]) -> Option<usize> {
        let mut level = 0;
        let mut i = 0;
        while i < data.len() {
            match data[i] {
                b'\\' => i += 1,
                b'(' => level += 1,
                b')' => {
                    level -= 1;
                    if level == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Splits `dest "title"` (or `'title'`) into destination and title.
    pub fn split_title(inner: &[u8]) -> (&[u8], &[u8]) {
        let inner = trim(inner);
        if let Some(&quote @ (b'"' | b'\'')) = inner.last() {
            let body = &inner[..inner.len() - 1];
            let open = (1..body.len())
                .rev()
                .find(|&j| body[j] == quote && is_space(body[j - 1]));
            if let Some(open) = open {
                return (trim(&inner[..open]), &body[open + 1..]);
            }
        }
        (inner, &[][..])
    }
}

fn trim(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|&b| !is_space(b)).unwrap_or(data.len());
    let end = data.iter().rposition(|&b| !is_space(b)).map_or(start, |i| i + 1);
    &data[start..end.max(start)]
}

/// `[text](destination "title")`.
pub(crate) fn link(p: &mut Parser, data: &[u8], offset: usize) -> (usize, Option<NodeId>) {
    if p.state.inside_link {
        return (0, None);
    }
    let data = &data[offset..];
    let Some(text_end) = Link::text_end(data) else {
        return (0, None);
    };
    if data.get(text_end + 1) != Some(&b'(') {
        return (0, None);
    }
    let dest_start = text_end + 1;
    let Some(dest_end) = Link::destination_end(&data[dest_start..]) else {
        return (0, None);
    };
    let dest_end = dest_start + dest_end;

    let (destination, title) = Link::split_title(&data[dest_start + 1..dest_end]);
    let destination = destination
        .strip_prefix(b"<")
        .and_then(|d| d.strip_suffix(b">"))
        .unwrap_or(destination);

    let node = p.tree.create_node(NodeType::Link);
    p.tree[node].link.destination = unescape(destination);
    p.tree[node].link.title = unescape(title);

    p.state.inside_link = true;
    p.inline(node, &data[1..text_end]);
    p.state.inside_link = false;

    (dest_end + 1, Some(node))
}
