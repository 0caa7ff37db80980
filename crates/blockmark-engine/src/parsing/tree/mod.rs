//! # Container Tree
//!
//! Arena-backed document tree. Every node lives in a single `Vec` owned by
//! [`Tree`] and is addressed by a stable [`NodeId`]; parent, child and sibling
//! links are stored as optional ids, so detaching or reparenting a node is an
//! O(1) relink and there are no ownership cycles.
//!
//! A parent's child list is the authoritative ownership relation. The
//! `parent`/`prev`/`next` links are back-references used for upward and
//! lateral traversal only.

pub mod types;
pub mod walk;

use std::ops::{Index, IndexMut};

pub use types::{CellAlign, CellData, LinkData, ListData, ListFlags, NodeType};
pub use walk::WalkStatus;

/// Stable index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot append {child:?} to {parent:?}: parent is closed")]
    ClosedParent { parent: NodeId, child: NodeId },
}

/// One block or inline element.
#[derive(Debug, Clone)]
pub struct Node {
    pub node_type: NodeType,
    /// Raw, not yet inline-parsed text of a leaf block. Emptied by the inline pass.
    pub content: Vec<u8>,
    /// Text of `Text` and `Entity` nodes.
    pub literal: Vec<u8>,
    /// Whether the node still accepts appended block children.
    pub open: bool,
    pub list: ListData,
    pub cell: CellData,
    pub link: LinkData,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl Node {
    fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            content: Vec::new(),
            literal: Vec::new(),
            open: true,
            list: ListData::default(),
            cell: CellData::default(),
            link: LinkData::default(),
            parent: None,
            first_child: None,
            last_child: None,
            prev: None,
            next: None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.last_child
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// The document tree produced by a parse.
///
/// The root is always a `Document` node at [`Tree::root`].
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates a tree holding only an open `Document` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeType::Document)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes ever allocated, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Allocates a new open, childless, parentless node.
    pub fn create_node(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(node_type));
        id
    }

    /// Makes `child` the last child of `parent`.
    ///
    /// Fails if `parent` has been closed. `child` is detached from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self[parent].open {
            return Err(TreeError::ClosedParent { parent, child });
        }
        self.push_child(parent, child);
        Ok(())
    }

    /// Appends without the open check. Used by the inline pass, which fills
    /// leaf blocks that were closed during block parsing.
    pub(crate) fn push_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let last = self[parent].last_child;
        {
            let node = &mut self[child];
            node.parent = Some(parent);
            node.prev = last;
        }
        match last {
            Some(last) => self[last].next = Some(child),
            None => self[parent].first_child = Some(child),
        }
        self[parent].last_child = Some(child);
    }

    /// Removes `id` from its parent's child list and clears its back-references.
    ///
    /// The node and its subtree stay allocated but become unreachable from the root.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self[id];
            (node.parent, node.prev, node.next)
        };
        match prev {
            Some(prev) => self[prev].next = next,
            None => {
                if let Some(parent) = parent {
                    self[parent].first_child = next;
                }
            }
        }
        match next {
            Some(next) => self[next].prev = prev,
            None => {
                if let Some(parent) = parent {
                    self[parent].last_child = prev;
                }
            }
        }
        let node = &mut self[id];
        node.parent = None;
        node.prev = None;
        node.next = None;
    }

    /// Iterates over the direct children of `id` in document order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self[id].first_child,
        }
    }

    /// True if `ancestor` is `node` or lies on the path from `node` to the root.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self[id].parent;
        }
        false
    }

    /// Number of ancestors of `id` with the given type.
    pub fn depth_of(&self, id: NodeId, node_type: NodeType) -> usize {
        let mut depth = 0;
        let mut cur = self[id].parent;
        while let Some(parent) = cur {
            if self[parent].node_type == node_type {
                depth += 1;
            }
            cur = self[parent].parent;
        }
        depth
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree[id].next;
        Some(id)
    }
}
