use crate::parsing::{NodeId, NodeType, Parser};

/// `&name;`, `&#123;` or `&#x1F;`, kept verbatim as an `Entity` node.
pub(crate) fn entity(p: &mut Parser, data: &[u8], offset: usize) -> (usize, Option<NodeId>) {
    let data = &data[offset..];
    let mut end = 1;
    if data.get(end) == Some(&b'#') {
        end += 1;
    }
    let name_start = end;
    while end < data.len() && data[end].is_ascii_alphanumeric() {
        end += 1;
    }
    if end == name_start || data.get(end) != Some(&b';') {
        return (0, None);
    }
    end += 1;

    let node = p.tree.create_node(NodeType::Entity);
    p.tree[node].literal = data[..end].to_vec();
    (end, Some(node))
}
