#![forbid(unsafe_code)]

//! Tab-order traversal over the node tree.
//!
//! The focus chain is not a separate structure: it is the node tree read as
//! a pre-order sequence via parent back-references and each node's own
//! child list. The activation decision lives with the caller (it must
//! resign the previous responder first), so both searches take a
//! `try_activate` callback and stop at the first success.

use std::rc::Rc;

use crate::node::NodeRef;

/// Pre-order depth-first search from `node` (inclusive) for the first
/// candidate `try_activate` accepts.
pub fn search_tree(
    node: &NodeRef,
    try_activate: &mut dyn FnMut(&NodeRef) -> bool,
) -> Option<NodeRef> {
    if try_activate(node) {
        return Some(node.clone());
    }
    let children: Vec<NodeRef> = node.borrow().children().to_vec();
    for child in &children {
        if let Some(found) = search_tree(child, try_activate) {
            return Some(found);
        }
    }
    None
}

/// Search the tree strictly after `current` in document order.
///
/// Walks up through parent back-references; at each ancestor, searches the
/// children strictly after the branch just ascended from (by identity, not
/// by identifier) in pre-order. Returns `None` once the walk passes the
/// root without success; the caller handles wrap-around with a full
/// [`search_tree`] pass.
pub fn search_after(
    current: &NodeRef,
    try_activate: &mut dyn FnMut(&NodeRef) -> bool,
) -> Option<NodeRef> {
    let mut child = current.clone();
    loop {
        let parent = child.borrow().parent().upgrade()?;
        let siblings: Vec<NodeRef> = parent.borrow().children().to_vec();
        let position = siblings.iter().position(|s| Rc::ptr_eq(s, &child));
        if let Some(position) = position {
            for sibling in &siblings[position + 1..] {
                if let Some(found) = search_tree(sibling, try_activate) {
                    return Some(found);
                }
            }
        }
        child = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{self, Node, NodeState};

    fn focusable(identifier: &str) -> NodeRef {
        Node::new(
            identifier,
            NodeState::Button {
                pressed: false,
                focused: false,
                action: Rc::new(|| {}),
            },
        )
    }

    fn can_focus(node: &NodeRef) -> bool {
        node.borrow().can_become_first_responder()
    }

    fn tree() -> (NodeRef, NodeRef, NodeRef, NodeRef) {
        // root -> [a, passive -> [b], c]
        let root = Node::new("root", NodeState::Passive);
        let a = focusable("root0");
        let wrapper = Node::new("root1", NodeState::Passive);
        let b = focusable("root10");
        let c = focusable("root2");
        node::append_child(&root, a.clone());
        node::append_child(&root, wrapper.clone());
        node::append_child(&wrapper, b.clone());
        node::append_child(&root, c.clone());
        (root, a, b, c)
    }

    #[test]
    fn search_tree_finds_first_in_preorder() {
        let (root, a, _, _) = tree();
        let found = search_tree(&root, &mut can_focus).unwrap();
        assert!(Rc::ptr_eq(&found, &a));
    }

    #[test]
    fn search_after_descends_into_later_branches() {
        let (_root, a, b, c) = tree();
        let found = search_after(&a, &mut can_focus).unwrap();
        assert!(Rc::ptr_eq(&found, &b));
        let found = search_after(&b, &mut can_focus).unwrap();
        assert!(Rc::ptr_eq(&found, &c));
    }

    #[test]
    fn search_after_last_returns_none() {
        let (_, _, _, c) = tree();
        assert!(search_after(&c, &mut can_focus).is_none());
    }

    #[test]
    fn search_stops_at_first_acceptance() {
        let (root, _, _, _) = tree();
        let mut asked = 0usize;
        let found = search_tree(&root, &mut |node| {
            asked += 1;
            node.borrow().can_become_first_responder()
        });
        assert!(found.is_some());
        // Root is tested and rejected, then the first leaf accepts.
        assert_eq!(asked, 2);
    }
}
