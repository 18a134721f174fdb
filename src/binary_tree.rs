//! Structural utilities for any binary tree of [`Node`]s, balanced or not.
//!
//! Nothing here relies on the ordering of values (except [`is_bstree`]) or on the cached heights
//! kept by the AVL layer, so they work equally well on hand-built trees.

use std::collections::VecDeque;

use crate::node::{Node, SubTree};

/// Height of the tree, computed from its structure. An empty tree has a height of `-1` and a
/// single leaf a height of `0`.
pub fn height<T>(link: &SubTree<T>) -> isize {
    let mut height = -1;
    let mut level: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    while !level.is_empty() {
        height += 1;
        let mut next = Vec::new();
        for node in level {
            next.extend(node.left.as_deref());
            next.extend(node.right.as_deref());
        }
        level = next;
    }

    height
}

/// Number of nodes in the tree.
pub fn node_count<T>(link: &SubTree<T>) -> usize {
    let mut count = 0;
    let mut pending: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    while let Some(node) = pending.pop() {
        count += 1;
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }

    count
}

/// Frees every node of the tree and leaves `link` empty.
pub fn release<T>(link: &mut SubTree<T>) {
    // `Node`'s `Drop` takes care of the rest without recursing.
    *link = None;
}

/// Returns `true` if the tree satisfies the binary search tree ordering: every value in a left
/// subtree is not greater than its ancestor and every value in a right subtree is not less.
pub fn is_bstree<T: Ord>(link: &SubTree<T>) -> bool {
    // Each pending node carries the bounds inherited from its ancestors.
    let mut pending: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
    pending.extend(link.as_deref().map(|root| (root, None, None)));

    while let Some((node, lower, upper)) = pending.pop() {
        if lower.is_some_and(|lower| node.value < *lower)
            || upper.is_some_and(|upper| node.value > *upper)
        {
            return false;
        }
        let value = Some(&node.value);
        if let Some(left) = node.left.as_deref() {
            pending.push((left, lower, value));
        }
        if let Some(right) = node.right.as_deref() {
            pending.push((right, value, upper));
        }
    }

    true
}

/// Visits values breadth first, left to right within each level.
pub fn visit_levelorder<T>(link: &SubTree<T>, mut visit: impl FnMut(&T)) {
    let mut queue: VecDeque<&Node<T>> = link.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visit(&node.value);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
}

/// Visits each node before its left then right subtree.
pub fn visit_preorder<T>(link: &SubTree<T>, mut visit: impl FnMut(&T)) {
    let mut pending: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    while let Some(node) = pending.pop() {
        visit(&node.value);
        // Right goes on first so the left subtree is visited first.
        pending.extend(node.right.as_deref());
        pending.extend(node.left.as_deref());
    }
}

/// Visits the left subtree, then the node, then the right subtree. For a binary search tree this
/// is sorted order.
pub fn visit_inorder<T>(link: &SubTree<T>, mut visit: impl FnMut(&T)) {
    let mut pending: Vec<&Node<T>> = Vec::new();
    let mut current = link.as_deref();
    loop {
        while let Some(node) = current {
            pending.push(node);
            current = node.left.as_deref();
        }
        let Some(node) = pending.pop() else {
            break;
        };
        visit(&node.value);
        current = node.right.as_deref();
    }
}

/// Visits both subtrees, left first, before the node itself.
pub fn visit_postorder<T>(link: &SubTree<T>, mut visit: impl FnMut(&T)) {
    // Node, right, left order reversed is left, right, node.
    let mut pending: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    let mut reversed: Vec<&Node<T>> = Vec::new();
    while let Some(node) = pending.pop() {
        reversed.push(node);
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }

    for node in reversed.into_iter().rev() {
        visit(&node.value);
    }
}

/// Values in level order.
pub fn levelorder_traversal<T: Clone>(link: &SubTree<T>) -> Vec<T> {
    let mut values = Vec::new();
    visit_levelorder(link, |value| values.push(value.clone()));
    values
}

/// Values in pre-order.
pub fn preorder_traversal<T: Clone>(link: &SubTree<T>) -> Vec<T> {
    let mut values = Vec::new();
    visit_preorder(link, |value| values.push(value.clone()));
    values
}

/// Values in in-order.
pub fn inorder_traversal<T: Clone>(link: &SubTree<T>) -> Vec<T> {
    let mut values = Vec::new();
    visit_inorder(link, |value| values.push(value.clone()));
    values
}

/// Values in post-order.
pub fn postorder_traversal<T: Clone>(link: &SubTree<T>) -> Vec<T> {
    let mut values = Vec::new();
    visit_postorder(link, |value| values.push(value.clone()));
    values
}
