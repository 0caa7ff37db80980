use crate::parsing::{Extensions, NodeId, NodeType, Parser};

/// Characters a backslash makes literal.
pub const ESCAPE_CHARS: &[u8] = b"\\`*_{}[]()#+-.!:|&<>~";

pub(crate) fn escape(p: &mut Parser, data: &[u8], offset: usize) -> (usize, Option<NodeId>) {
    let Some(&next) = data.get(offset + 1) else {
        return (0, None);
    };
    if next == b'\n' && p.extensions.contains(Extensions::BACKSLASH_LINE_BREAK) {
        return (2, Some(p.tree.create_node(NodeType::Hardbreak)));
    }
    if !ESCAPE_CHARS.contains(&next) {
        return (0, None);
    }
    (2, Some(p.text(&[next])))
}

/// Removes backslashes in front of escapable characters.
pub fn unescape(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        if data[i] == b'\\' && data.get(i + 1).is_some_and(|c| ESCAPE_CHARS.contains(c)) {
            i += 1;
        }
        out.push(data[i]);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::Options;

    #[test]
    fn escaped_star_is_text() {
        let mut p = Parser::new(Options::default());
        let (n, node) = escape(&mut p, br"\*a", 0);
        assert_eq!(n, 2);
        let node = node.unwrap();
        assert_eq!(p.tree[node].literal, b"*");
    }

    #[test]
    fn letters_are_not_escapable() {
        let mut p = Parser::new(Options::default());
        assert_eq!(escape(&mut p, br"\a", 0), (0, None));
        assert_eq!(escape(&mut p, br"\", 0), (0, None));
    }

    #[test]
    fn backslash_newline_needs_extension() {
        let mut p = Parser::new(Options::none());
        assert_eq!(escape(&mut p, b"\\\nb", 0), (0, None));

        let mut p = Parser::new(Options::default());
        let (n, node) = escape(&mut p, b"\\\nb", 0);
        assert_eq!(n, 2);
        assert_eq!(p.tree[node.unwrap()].node_type, NodeType::Hardbreak);
    }

    #[test]
    fn unescape_keeps_other_backslashes() {
        assert_eq!(unescape(br"a\_b\c"), br"a_b\c");
        assert_eq!(unescape(br"\\"), br"\");
    }
}
