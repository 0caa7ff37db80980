use std::fmt;

use serde::Serialize;

use crate::parsing::{
    NodeId, NodeType, Tree,
    tree::{CellAlign, ListFlags},
};

/// Snapshot of one node and its subtree.
///
/// `Display` prints an indented outline, one node per line, which is what
/// the inline snapshots in the test suites compare against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snap {
    /// Node kind plus its distinguishing payload, e.g. `List ordered tight`.
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Snap>,
}

impl Snap {
    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.label, indent = depth * 2)?;
        for child in &self.children {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

/// Converts the reachable part of `tree` into a [`Snap`].
pub fn normalize(tree: &Tree) -> Snap {
    snap(tree, tree.root())
}

fn snap(tree: &Tree, id: NodeId) -> Snap {
    Snap {
        label: label(tree, id),
        children: tree.children(id).map(|child| snap(tree, child)).collect(),
    }
}

fn label(tree: &Tree, id: NodeId) -> String {
    let node = &tree[id];
    match node.node_type {
        NodeType::List => {
            let flags = node.list.flags;
            let kind = if flags.contains(ListFlags::DEFINITION) {
                "definition"
            } else if flags.contains(ListFlags::ORDERED) {
                "ordered"
            } else {
                "unordered"
            };
            let spacing = if node.list.tight { "tight" } else { "loose" };
            format!("List {kind} {spacing}")
        }
        NodeType::Item => {
            let flags = node.list.flags;
            if flags.contains(ListFlags::TERM) {
                "Item term".into()
            } else if flags.contains(ListFlags::DEFINITION) {
                "Item definition".into()
            } else {
                "Item".into()
            }
        }
        NodeType::TableCell => {
            let mut label = String::from("TableCell");
            if node.cell.is_header {
                label.push_str(" header");
            }
            if let Some(align) = node.cell.align.keyword() {
                label.push(' ');
                label.push_str(align);
            } else if node.cell.align != CellAlign::empty() {
                label.push_str(" ?");
            }
            label
        }
        NodeType::Text => format!("Text {:?}", String::from_utf8_lossy(&node.literal)),
        NodeType::Entity => format!("Entity {:?}", String::from_utf8_lossy(&node.literal)),
        NodeType::Link if node.link.title.is_empty() => {
            format!("Link {:?}", String::from_utf8_lossy(&node.link.destination))
        }
        NodeType::Link => format!(
            "Link {:?} {:?}",
            String::from_utf8_lossy(&node.link.destination),
            String::from_utf8_lossy(&node.link.title)
        ),
        other => format!("{other:?}"),
    }
}
