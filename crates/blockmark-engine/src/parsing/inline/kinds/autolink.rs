use crate::parsing::{NodeId, NodeType, Parser, inline::is_space};

/// First bytes of the recognized schemes, both cases.
pub const TRIGGERS: [u8; 6] = [b'h', b'm', b'f', b'H', b'M', b'F'];

const SCHEMES: [&[u8]; 4] = [b"http://", b"https://", b"ftp://", b"mailto:"];

/// Length of the scheme prefix at the start of `data`, ignoring case.
pub fn scheme_len(data: &[u8]) -> Option<usize> {
    for scheme in SCHEMES {
        if data.len() >= scheme.len() && data[..scheme.len()].eq_ignore_ascii_case(scheme) {
            return Some(scheme.len());
        }
    }
    None
}

fn is_trailing_punctuation(b: u8) -> bool {
    matches!(b, b'.' | b',' | b';' | b':' | b'!' | b'?' | b'\'' | b'"')
}

/// Length of the URL at the start of `data` after trimming trailing
/// punctuation and an unbalanced closing parenthesis.
pub fn url_len(data: &[u8], scheme: usize) -> usize {
    let mut end = scheme;
    while end < data.len() && !is_space(data[end]) && data[end] != b'<' {
        end += 1;
    }

    loop {
        while end > scheme && is_trailing_punctuation(data[end - 1]) {
            end -= 1;
        }
        if end > scheme && data[end - 1] == b')' {
            let url = &data[..end];
            let opens = url.iter().filter(|&&b| b == b'(').count();
            let closes = url.iter().filter(|&&b| b == b')').count();
            if closes > opens {
                end -= 1;
                continue;
            }
        }
        break;
    }
    end
}

/// A bare URL at the start of a word becomes a `Link` whose text is the URL.
pub(crate) fn autolink(p: &mut Parser, data: &[u8], offset: usize) -> (usize, Option<NodeId>) {
    if p.state.inside_link {
        return (0, None);
    }
    if offset > 0 && data[offset - 1].is_ascii_alphanumeric() {
        return (0, None);
    }

    let data = &data[offset..];
    let Some(scheme) = scheme_len(data) else {
        return (0, None);
    };
    let end = url_len(data, scheme);
    if end == scheme {
        return (0, None);
    }

    let url = &data[..end];
    let node = p.tree.create_node(NodeType::Link);
    p.tree[node].link.destination = url.to_vec();
    let text = p.text(url);
    p.tree.push_child(node, text);
    (end, Some(node))
}
