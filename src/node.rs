//! The plain binary node every tree in this crate is built from.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// An owned, possibly empty, subtree. `None` is the empty tree.
pub type SubTree<T> = Option<Box<Node<T>>>;

/// A node holding a value and exclusively owning its two (possibly empty) subtrees.
#[derive(Debug)]
pub struct Node<T> {
    /// The stored value.
    pub value: T,
    /// Subtree of values not greater than `value`.
    pub left: SubTree<T>,
    /// Subtree of values not less than `value`.
    pub right: SubTree<T>,

    /// Cached height of the subtree rooted here. A leaf has a height of 0. Only the AVL layer
    /// keeps this up to date; for other trees it stays at whatever it was created with.
    pub(crate) height: isize,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` with the given `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Allocates a new boxed leaf, reporting [`Error::ResourceExhausted`] instead of aborting when
    /// the allocator is out of memory.
    pub(crate) fn try_new_boxed(value: T) -> Result<Box<Self>> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node` always contains an `isize` so `layout` has a non-zero size.
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Self>();
        let ptr = NonNull::new(ptr).ok_or(Error::ResourceExhausted)?;

        // SAFETY: `ptr` was just allocated by the global allocator with the layout of `Self` and
        // is non-null. Writing initialises it, after which `Box` may take ownership since `Box`
        // uses the same allocator and layout to free it.
        unsafe {
            ptr.as_ptr().write(Self::new(value));
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T: Clone> Clone for Node<T> {
    // Copies bottom-up so that a list-shaped tree doesn't recurse once per node: every subtree is
    // built before its parent and waits on `built` until the parent claims it.
    fn clone(&self) -> Self {
        fn adopt<T: Clone>(source: &Node<T>, built: &mut Vec<Box<Node<T>>>) -> Node<T> {
            // The right subtree was finished last, so it's on top.
            let right = source.right.as_ref().and_then(|_| built.pop());
            let left = source.left.as_ref().and_then(|_| built.pop());
            Node {
                value: source.value.clone(),
                left,
                right,
                height: source.height,
            }
        }

        let mut pending: Vec<&Node<T>> = Vec::new();
        let mut reversed: Vec<&Node<T>> = Vec::new();
        pending.extend(self.left.as_deref());
        pending.extend(self.right.as_deref());
        while let Some(node) = pending.pop() {
            reversed.push(node);
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in reversed.into_iter().rev() {
            let copy = adopt(node, &mut built);
            built.push(Box::new(copy));
        }

        adopt(self, &mut built)
    }
}

impl<T> Drop for Node<T> {
    // Releasing a list-shaped tree recursively would use one stack frame per node, so children are
    // detached onto a heap stack first and each node is dropped childless.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
