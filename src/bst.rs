//! An unbalanced Binary Search Tree and the search utilities the AVL tree shares with it.
//!
//! Values smaller than a node go to its left; everything else (including equal values) goes to
//! its right. Without rebalancing, inserting sorted data degrades the tree into a list, so every
//! operation here walks the tree with a loop or an explicit stack rather than recursing once per
//! level.
//!
//! # Examples
//!
//! ```
//! use binary_trees::bst::BsTree;
//!
//! let mut tree = BsTree::new();
//! for value in [18, 20, 15, 30, 25, 40] {
//!     tree.insert(value).unwrap();
//! }
//!
//! assert_eq!(tree.min(), Ok(&15));
//! assert_eq!(tree.data_in_range(&16, &30), vec![18, 20, 25, 30]);
//!
//! assert!(tree.remove(&20));
//! assert!(!tree.contains(&20));
//! ```

use std::cmp::Ordering;

use crate::binary_tree;
use crate::error::{Error, Result};
use crate::node::{Node, SubTree};

/// Inserts `value` below `link` without rebalancing.
///
/// The node is allocated before the tree is touched, so on [`Error::ResourceExhausted`] the tree
/// is unchanged.
pub fn insert<T: Ord>(link: &mut SubTree<T>, value: T) -> Result<()> {
    let leaf = Node::try_new_boxed(value)?;
    insert_node(link, leaf);
    Ok(())
}

fn insert_node<T: Ord>(mut link: &mut SubTree<T>, leaf: Box<Node<T>>) {
    while let Some(node) = link {
        link = if leaf.value < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *link = Some(leaf);
}

/// Removes one node holding `value`. Returns whether anything was removed; an absent value is a
/// no-op.
///
/// A node with two children is replaced by its in-order successor (the minimum of its right
/// subtree).
pub fn remove<T: Ord>(mut link: &mut SubTree<T>, value: &T) -> bool {
    loop {
        let ordering = match link.as_deref() {
            None => return false,
            Some(node) => value.cmp(&node.value),
        };
        if ordering == Ordering::Equal {
            break;
        }
        let Some(node) = link else {
            return false;
        };
        link = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    unlink(link, split_min);
    true
}

/// Removes the root of `link`, promoting its only child or its in-order successor.
///
/// `split_min` detaches the leftmost node of the right subtree, returning it along with what is
/// left of that subtree. The promoted node's own height is left for the caller to fix.
pub(crate) fn unlink<T>(
    link: &mut SubTree<T>,
    split_min: impl FnOnce(Box<Node<T>>) -> (Box<Node<T>>, SubTree<T>),
) {
    let Some(mut node) = link.take() else {
        return;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (left, Some(right)) => {
            let (mut successor, rest) = split_min(right);
            successor.left = left;
            successor.right = rest;
            Some(successor)
        }
    };
    // `node` now has no children and drops with the removed value.
}

/// Detaches the leftmost node of `root`'s subtree, walking down without recursion.
fn split_min<T>(mut root: Box<Node<T>>) -> (Box<Node<T>>, SubTree<T>) {
    match detach_min(&mut root.left) {
        Some(min) => (min, Some(root)),
        None => {
            let rest = root.right.take();
            (root, rest)
        }
    }
}

/// Takes the leftmost node out from under `link`, moving its right child into its place.
fn detach_min<T>(mut link: &mut SubTree<T>) -> Option<Box<Node<T>>> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = link else {
            break;
        };
        link = &mut node.left;
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Returns `true` if some node holds `value`.
pub fn contains<T: Ord>(link: &SubTree<T>, value: &T) -> bool {
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match value.cmp(&node.value) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Equal => return true,
            Ordering::Greater => node.right.as_deref(),
        };
    }

    false
}

/// The leftmost node, if any.
pub fn min_node<T>(link: &SubTree<T>) -> Option<&Node<T>> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(node)
}

/// The rightmost node, if any.
pub fn max_node<T>(link: &SubTree<T>) -> Option<&Node<T>> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(node)
}

/// The smallest value, or [`Error::EmptyContainer`] for an empty tree.
pub fn min<T>(link: &SubTree<T>) -> Result<&T> {
    min_node(link)
        .map(|node| &node.value)
        .ok_or(Error::EmptyContainer)
}

/// The largest value, or [`Error::EmptyContainer`] for an empty tree.
pub fn max<T>(link: &SubTree<T>) -> Result<&T> {
    max_node(link)
        .map(|node| &node.value)
        .ok_or(Error::EmptyContainer)
}

/// The smallest stored value strictly greater than `value`. `value` itself need not be stored.
pub fn inorder_successor<'a, T: Ord>(link: &'a SubTree<T>, value: &T) -> Option<&'a T> {
    let mut successor = None;
    let mut current = link.as_deref();
    while let Some(node) = current {
        if *value < node.value {
            successor = Some(&node.value);
            current = node.left.as_deref();
        } else {
            current = node.right.as_deref();
        }
    }

    successor
}

/// All values `v` with `low <= v <= high`, in ascending order.
pub fn data_in_range<T: Ord + Clone>(link: &SubTree<T>, low: &T, high: &T) -> Vec<T> {
    let mut out = Vec::new();
    let mut pending: Vec<&Node<T>> = Vec::new();
    let mut current = link.as_deref();
    loop {
        // In-order walk that skips left subtrees lying wholly below `low`. Equal values can sit on
        // either side once a tree has been rotated, so only strictly smaller nodes are skipped.
        while let Some(node) = current {
            if *low <= node.value {
                pending.push(node);
                current = node.left.as_deref();
            } else {
                current = node.right.as_deref();
            }
        }
        let Some(node) = pending.pop() else {
            break;
        };
        if node.value > *high {
            break;
        }
        out.push(node.value.clone());
        current = node.right.as_deref();
    }

    out
}

/// A Binary Search Tree without any balancing. Its height depends entirely on insertion order.
#[derive(Clone, Debug)]
pub struct BsTree<T> {
    root: SubTree<T>,
}

impl<T> Default for BsTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BsTree<T> {
    /// Generates a new, empty `BsTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Number of values in the tree.
    pub fn count(&self) -> usize {
        binary_tree::node_count(&self.root)
    }

    /// Height of the tree, `-1` when empty.
    pub fn height(&self) -> isize {
        binary_tree::height(&self.root)
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value`. Equal values are kept as separate nodes.
    pub fn insert(&mut self, value: T) -> Result<()>
    where
        T: Ord,
    {
        insert(&mut self.root, value)
    }

    /// Removes one occurrence of `value`, returning whether it was present.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        remove(&mut self.root, value)
    }

    /// Returns `true` if the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        contains(&self.root, value)
    }

    /// The smallest value.
    pub fn min(&self) -> Result<&T> {
        min(&self.root)
    }

    /// The largest value.
    pub fn max(&self) -> Result<&T> {
        max(&self.root)
    }

    /// The values between `low` and `high` inclusive, ascending.
    pub fn data_in_range(&self, low: &T, high: &T) -> Vec<T>
    where
        T: Ord + Clone,
    {
        data_in_range(&self.root, low, high)
    }

    /// Empties the tree.
    pub fn reset(&mut self) {
        binary_tree::release(&mut self.root);
    }

    /// The root of the tree, for use with the [`binary_tree`] utilities.
    pub fn root(&self) -> &SubTree<T> {
        &self.root
    }
}
