use super::{NodeId, Tree};

/// What a walk visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Continue with the next node in traversal order.
    GoToNext,
    /// Do not descend into the current node's children.
    SkipChildren,
    /// Stop the walk.
    Terminate,
}

struct Walker {
    root: NodeId,
    current: Option<NodeId>,
    entering: bool,
}

impl Walker {
    fn advance(&mut self, tree: &Tree) {
        let Some(current) = self.current else {
            return;
        };
        let container = tree[current].node_type.is_container();

        if (!container || !self.entering) && current == self.root {
            self.current = None;
            return;
        }

        if self.entering && container {
            match tree[current].first_child() {
                Some(child) => self.current = Some(child),
                None => self.entering = false,
            }
        } else {
            match tree[current].next() {
                Some(next) => {
                    self.current = Some(next);
                    self.entering = true;
                }
                None => {
                    self.current = tree[current].parent();
                    self.entering = false;
                }
            }
        }
    }
}

impl Tree {
    /// Depth-first traversal starting at `root`.
    ///
    /// Container nodes are passed to `visitor` twice, once with
    /// `entering == true` before their children and once with `false` after
    /// them. Other nodes are visited once, with `entering == true`.
    pub fn walk<F>(&self, root: NodeId, mut visitor: F)
    where
        F: FnMut(NodeId, bool) -> WalkStatus,
    {
        let mut walker = Walker {
            root,
            current: Some(root),
            entering: true,
        };
        while let Some(current) = walker.current {
            match visitor(current, walker.entering) {
                WalkStatus::GoToNext => walker.advance(self),
                WalkStatus::SkipChildren => {
                    walker.entering = false;
                    walker.advance(self);
                }
                WalkStatus::Terminate => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tree::NodeType;
    use pretty_assertions::assert_eq;

    /// Document > [Paragraph > Text, HorizontalRule]
    fn sample() -> Tree {
        let mut tree = Tree::new();
        let root = tree.root();
        let para = tree.create_node(NodeType::Paragraph);
        let text = tree.create_node(NodeType::Text);
        let rule = tree.create_node(NodeType::HorizontalRule);
        tree.append_child(root, para).unwrap();
        tree.append_child(para, text).unwrap();
        tree.append_child(root, rule).unwrap();
        tree
    }

    fn trace(tree: &Tree, status_for: impl Fn(NodeType, bool) -> WalkStatus) -> Vec<String> {
        let mut seen = Vec::new();
        tree.walk(tree.root(), |id, entering| {
            let ty = tree[id].node_type;
            seen.push(format!("{}{ty:?}", if entering { "+" } else { "-" }));
            status_for(ty, entering)
        });
        seen
    }

    #[test]
    fn containers_twice_leaves_once() {
        let tree = sample();
        let seen = trace(&tree, |_, _| WalkStatus::GoToNext);
        assert_eq!(
            seen,
            vec![
                "+Document",
                "+Paragraph",
                "+Text",
                "-Paragraph",
                "+HorizontalRule",
                "-Document"
            ]
        );
    }

    #[test]
    fn skip_children() {
        let tree = sample();
        let seen = trace(&tree, |ty, _| {
            if ty == NodeType::Paragraph {
                WalkStatus::SkipChildren
            } else {
                WalkStatus::GoToNext
            }
        });
        assert_eq!(
            seen,
            vec!["+Document", "+Paragraph", "+HorizontalRule", "-Document"]
        );
    }

    #[test]
    fn terminate_stops_immediately() {
        let tree = sample();
        let seen = trace(&tree, |ty, _| {
            if ty == NodeType::Text {
                WalkStatus::Terminate
            } else {
                WalkStatus::GoToNext
            }
        });
        assert_eq!(seen, vec!["+Document", "+Paragraph", "+Text"]);
    }

    #[test]
    fn walk_from_leaf_root_visits_once() {
        let tree = sample();
        let rule = tree[tree.root()].last_child().unwrap();
        let mut count = 0;
        tree.walk(rule, |_, _| {
            count += 1;
            WalkStatus::GoToNext
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn walk_subtree_does_not_escape_root() {
        let tree = sample();
        let para = tree[tree.root()].first_child().unwrap();
        let mut seen = Vec::new();
        tree.walk(para, |id, entering| {
            seen.push((tree[id].node_type, entering));
            WalkStatus::GoToNext
        });
        assert_eq!(
            seen,
            vec![
                (NodeType::Paragraph, true),
                (NodeType::Text, true),
                (NodeType::Paragraph, false)
            ]
        );
    }
}
