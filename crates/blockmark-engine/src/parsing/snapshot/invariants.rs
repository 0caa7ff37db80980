use crate::parsing::{NodeId, Tree, WalkStatus};

/// Panics if `tree` breaks a structural rule that every finished parse must uphold.
pub fn check(tree: &Tree) {
    let root = tree.root();
    assert!(tree[root].parent().is_none(), "document has a parent");

    tree.walk(root, |id, entering| {
        if entering {
            check_node(tree, id);
        }
        WalkStatus::GoToNext
    });
}

fn check_node(tree: &Tree, id: NodeId) {
    let node = &tree[id];
    let kind = node.node_type;

    if kind.is_block() {
        assert!(!node.open, "{kind:?} {id:?} still open after parse");
    }
    if kind.takes_inline() {
        assert!(
            node.content.is_empty(),
            "{kind:?} {id:?} kept raw content {:?}",
            String::from_utf8_lossy(&node.content)
        );
    }

    let mut prev: Option<NodeId> = None;
    for child in tree.children(id) {
        let c = &tree[child];
        assert_eq!(c.parent(), Some(id), "{child:?} has a stale parent link");
        assert_eq!(c.prev(), prev, "{child:?} has a stale prev link");

        let child_kind = c.node_type;
        if kind.takes_inline() || !kind.is_block() {
            assert!(
                !child_kind.is_block(),
                "{kind:?} {id:?} holds block child {child_kind:?}"
            );
        } else {
            assert!(
                kind.can_contain(child_kind),
                "{kind:?} {id:?} may not contain {child_kind:?}"
            );
        }
        prev = Some(child);
    }
    assert_eq!(node.last_child(), prev, "{id:?} has a stale last_child link");
}
