//! Errors reported by the trees in this crate.
//!
//! Missing values are not errors: `remove` on an absent value and `contains` returning `false`
//! are ordinary outcomes.

use thiserror::Error;

/// Failures surfaced by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A query needing at least one element (e.g. `min`/`max`) ran on an empty tree.
    #[error("container is empty")]
    EmptyContainer,
    /// Allocating a new node failed. The tree is left exactly as it was before the call.
    #[error("failed to allocate a tree node")]
    ResourceExhausted,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
