//! Tip tracking: keeps the open path from the document to the tip in step
//! with the construct being parsed.

use crate::parsing::{NodeId, NodeType, Parser};

impl Parser {
    /// Closes `node` and moves the tip to its parent.
    ///
    /// When `node` is on the open path, every open node between the tip and
    /// `node` is closed first, innermost first.
    pub(crate) fn finalize(&mut self, node: NodeId) {
        if self.tree.is_ancestor_or_self(node, self.state.tip) {
            let mut cur = self.state.tip;
            while cur != node {
                self.tree[cur].open = false;
                match self.tree[cur].parent() {
                    Some(parent) => cur = parent,
                    None => break,
                }
            }
        }
        self.tree[node].open = false;
        self.state.tip = self.tree[node].parent().unwrap_or(self.state.doc);
    }

    /// Appends a new node of `node_type` below the tip, closing tips that
    /// cannot contain it, and makes it the new tip.
    pub(crate) fn add_child(&mut self, node_type: NodeType) -> NodeId {
        let node = self.tree.create_node(node_type);
        self.add_existing_child(node)
    }

    pub(crate) fn add_existing_child(&mut self, node: NodeId) -> NodeId {
        let node_type = self.tree[node].node_type;
        while !self.tree[self.state.tip].node_type.can_contain(node_type)
            && self.state.tip != self.state.doc
        {
            self.finalize(self.state.tip);
        }
        if let Err(err) = self.tree.append_child(self.state.tip, node) {
            log::warn!("{err}");
        }
        self.state.tip = node;
        node
    }

    /// Closes the containers the previous construct left open but the
    /// current one no longer belongs to. Runs at most once per construct.
    pub(crate) fn close_unmatched_blocks(&mut self) {
        if self.state.all_closed {
            return;
        }
        let mut cur = Some(self.state.old_tip);
        while let Some(node) = cur {
            if node == self.state.last_matched_container {
                break;
            }
            let parent = self.tree[node].parent();
            self.finalize(node);
            cur = parent;
        }
        self.state.old_tip = self.state.last_matched_container;
        self.state.all_closed = true;
    }

    /// Starts a new block: closes unmatched containers, appends a node of
    /// `node_type` and stores `content` on it.
    pub(crate) fn add_block(&mut self, node_type: NodeType, content: &[u8]) -> NodeId {
        self.close_unmatched_blocks();
        let node = self.add_child(node_type);
        self.tree[node].content = content.to_vec();
        node
    }

    /// Records where the next construct starts: everything between the
    /// current tip and `container` is still open but unmatched.
    pub(crate) fn begin_construct(&mut self, container: NodeId) {
        self.state.old_tip = self.state.tip;
        self.state.last_matched_container = container;
        self.state.all_closed = false;
    }

    /// Closes a leaf tip so that a nested block sequence starts inside a
    /// container that accepts blocks.
    pub(crate) fn block_container(&mut self) -> NodeId {
        while !self.tree[self.state.tip]
            .node_type
            .can_contain(NodeType::Paragraph)
            && self.state.tip != self.state.doc
        {
            self.finalize(self.state.tip);
        }
        self.state.tip
    }
}
