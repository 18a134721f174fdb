//! This crate provides a self-balancing Binary Search Tree (an AVL tree) along with the plain
//! binary tree and unbalanced BST building blocks it is made from.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value not greater than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value not less than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). An [`AvlTree`] limits the height to
//! `O(lg N)` where `N` is the number of nodes by rotating subtrees after every insert
//! and remove. Visiting the left subtree, then the subtree root, then the right subtree
//! yields the values in sorted order.
//!
//! ## Layout
//!
//! - [`node`]: the [`Node`] type and owned [`SubTree`] links.
//! - [`binary_tree`]: traversals, height, counting and release for any binary tree.
//! - [`bst`]: unbalanced insert/remove and the ordered queries shared by both trees.
//! - [`avl`]: the balanced tree.
//!
//! None of the trees do any internal locking. Wrap one in a lock to share it across threads.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod binary_tree;
pub mod bst;
pub mod error;
pub mod node;

pub use avl::AvlTree;
pub use bst::BsTree;
pub use error::{Error, Result};
pub use node::{Node, SubTree};
