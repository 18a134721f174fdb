//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Every node caches the height of its subtree. After an insert or remove, each node on the path
//! back up to the root has its height recomputed and, if its children's heights differ by more
//! than one, is rotated back into balance. This keeps the height of the whole tree within about
//! `1.44 * lg(N + 2)`.
//!
//! Balancing never changes the in-order sequence of values, so the read-only queries are the
//! plain [`bst`](crate::bst) ones.
//!
//! Equal values are kept as distinct nodes. They are inserted to the right of existing equal
//! values, but a rotation can later lift one above another, so an equal value may sit in either
//! subtree of a node.
//!
//! # Examples
//!
//! ```
//! use binary_trees::{AvlTree, Error};
//!
//! let mut tree = AvlTree::new();
//! assert_eq!(tree.min(), Err(Error::EmptyContainer));
//!
//! // Sorted input would turn an unbalanced tree into a list.
//! for value in 1..=7 {
//!     tree.insert(value).unwrap();
//! }
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.levelorder_traversal(), vec![4, 2, 6, 1, 3, 5, 7]);
//!
//! // Removing a missing value does nothing.
//! assert!(!tree.remove(&42));
//! assert!(tree.remove(&4));
//! assert_eq!(tree.inorder_traversal(), vec![1, 2, 3, 5, 6, 7]);
//! ```

use std::cmp::Ordering;

use crate::binary_tree;
use crate::bst;
use crate::error::Result;
use crate::node::{Node, SubTree};

/// Cached height of a subtree: `-1` when empty, `0` for a leaf.
pub fn height<T>(link: &SubTree<T>) -> isize {
    link.as_ref().map_or(-1, |node| node.height)
}

/// Height of the left subtree minus height of the right subtree.
fn balance_factor<T>(node: &Node<T>) -> isize {
    height(&node.left) - height(&node.right)
}

fn update_height<T>(node: &mut Node<T>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

/// Rotate `root` to the left, returning the new subtree root. Its right child moves up and `root`
/// becomes that child's left child. A node without a right child is returned unchanged.
///
/// ```text
///      root                       new_root
///     /    \                      /     \
///    x   new_root   rotate ->   root     z
///         /  \                  /  \
///        y    z                x    y
/// ```
fn rotate_left<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = root.right.take() else {
        return root;
    };
    root.right = new_root.left.take();
    update_height(&mut root);

    new_root.left = Some(root);
    update_height(&mut new_root);
    new_root
}

/// Mirror image of [`rotate_left`]: the left child moves up and `root` becomes its right child.
fn rotate_right<T>(mut root: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = root.left.take() else {
        return root;
    };
    root.left = new_root.right.take();
    update_height(&mut root);

    new_root.right = Some(root);
    update_height(&mut new_root);
    new_root
}

/// Refreshes the height of `node`, whose children are already balanced, and rotates it back into
/// balance if needed. Returns the root of the rebalanced subtree, which the caller must store
/// wherever `node` was.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
pub(crate) fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    update_height(&mut node);

    let factor = balance_factor(&node);
    let node = if factor > 1 {
        // Left-right case: the left child leans right.
        if node.left.as_deref().is_some_and(|left| balance_factor(left) < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if factor < -1 {
        // Right-left case: the right child leans left.
        if node.right.as_deref().is_some_and(|right| balance_factor(right) > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    };

    if cfg!(debug_assertions) {
        let left_height = height(&node.left);
        let right_height = height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!((left_height - right_height).abs() <= 1);
    }
    node
}

fn rebalance_link<T>(link: &mut SubTree<T>) {
    *link = link.take().map(balance);
}

/// Inserts `value`, rebalancing every node on the way back up.
///
/// The new node is allocated before the tree is touched, so on
/// [`Error::ResourceExhausted`](crate::Error::ResourceExhausted) the tree is left as it was.
pub fn insert<T: Ord>(link: &mut SubTree<T>, value: T) -> Result<()> {
    let leaf = Node::try_new_boxed(value)?;
    *link = Some(insert_node(link.take(), leaf));
    Ok(())
}

fn insert_node<T: Ord>(link: SubTree<T>, leaf: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut node) = link else {
        return leaf;
    };
    if leaf.value < node.value {
        node.left = Some(insert_node(node.left.take(), leaf));
    } else {
        node.right = Some(insert_node(node.right.take(), leaf));
    }

    balance(node)
}

/// Removes one node holding `value` and rebalances every node on the way back up. Returns whether
/// anything was removed; removing a missing value leaves the tree untouched.
///
/// A node with two children is replaced by its in-order successor, which is detached from the
/// right subtree with that subtree rebalanced along the way.
pub fn remove<T: Ord>(link: &mut SubTree<T>, value: &T) -> bool {
    let Some(node) = link else {
        return false;
    };
    let removed = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            bst::unlink(link, split_min);
            true
        }
    };

    // Unlike insertion, a removal can leave every ancestor needing a rotation.
    if removed {
        rebalance_link(link);
    }
    removed
}

/// Detaches the leftmost node of `node`'s subtree, rebalancing each node on the path above it.
/// Returns the detached node along with the root of what is left.
fn split_min<T>(mut node: Box<Node<T>>) -> (Box<Node<T>>, SubTree<T>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (node, rest)
        }
        Some(left) => {
            let (min, rest) = split_min(left);
            node.left = rest;
            (min, Some(balance(node)))
        }
    }
}

/// Returns `true` if every node's cached height is correct and its subtrees' heights differ by at
/// most one.
pub fn is_balanced<T>(link: &SubTree<T>) -> bool {
    /// The verified height of the subtree, or `None` if anything below is off.
    fn check<T>(link: &SubTree<T>) -> Option<isize> {
        let Some(node) = link else {
            return Some(-1);
        };
        let left = check(&node.left)?;
        let right = check(&node.right)?;
        let height = 1 + left.max(right);
        ((left - right).abs() <= 1 && node.height == height).then_some(height)
    }

    check(link).is_some()
}

/// A self-balancing Binary Search Tree (specifically, an AVL tree). This can be used for
/// inserting, finding, and removing values with `O(lg N)` height guaranteed at all times.
#[derive(Clone, Debug)]
pub struct AvlTree<T> {
    root: SubTree<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    /// Generates a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting every value in order.
    pub fn try_from_iter(values: impl IntoIterator<Item = T>) -> Result<Self>
    where
        T: Ord,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    /// Inserts the given value into the tree. Equal values are kept as separate nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(12).unwrap();
    /// tree.insert(20).unwrap();
    /// tree.insert(30).unwrap();
    ///
    /// // 12 -> 20 -> 30 was rotated so 20 is the root.
    /// assert_eq!(tree.levelorder_traversal(), vec![20, 12, 30]);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<()>
    where
        T: Ord,
    {
        insert(&mut self.root, value)
    }

    /// Removes one occurrence of `value` and returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        remove(&mut self.root, value)
    }

    /// Height of the tree: `-1` when empty, `0` with a single value.
    pub fn height(&self) -> isize {
        height(&self.root)
    }

    /// Number of values in the tree.
    pub fn count(&self) -> usize {
        binary_tree::node_count(&self.root)
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        bst::contains(&self.root, value)
    }

    /// The smallest value, or [`Error::EmptyContainer`](crate::Error::EmptyContainer).
    pub fn min(&self) -> Result<&T> {
        bst::min(&self.root)
    }

    /// The largest value, or [`Error::EmptyContainer`](crate::Error::EmptyContainer).
    pub fn max(&self) -> Result<&T> {
        bst::max(&self.root)
    }

    /// The smallest value strictly greater than `value`.
    pub fn inorder_successor(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        bst::inorder_successor(&self.root, value)
    }

    /// The values between `low` and `high` inclusive, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_trees::AvlTree;
    ///
    /// let tree = AvlTree::try_from_iter([12, 20, 8, 30, 25, 40, 4, 6, 2, 50]).unwrap();
    /// assert_eq!(tree.data_in_range(&5, &25), vec![6, 8, 12, 20, 25]);
    /// ```
    pub fn data_in_range(&self, low: &T, high: &T) -> Vec<T>
    where
        T: Ord + Clone,
    {
        bst::data_in_range(&self.root, low, high)
    }

    /// Values in sorted order.
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        binary_tree::inorder_traversal(&self.root)
    }

    /// Values level by level from the root, left to right.
    pub fn levelorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        binary_tree::levelorder_traversal(&self.root)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        binary_tree::release(&mut self.root);
    }

    /// The root of the tree, for use with the [`binary_tree`] utilities.
    pub fn root(&self) -> &SubTree<T> {
        &self.root
    }
}
