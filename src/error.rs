//! Errors surfaced by side-addressed child operations.

use crate::tree::NodeId;

/// Errors raised by the side-addressed child operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A side token other than `"left"` or `"right"` was given.
    #[error("invalid side: {0:?}")]
    InvalidSide(String),
    /// The reference passed to `get_side` is neither child of the node.
    #[error("{child:?} is not a child of {parent:?}")]
    NotAChild {
        /// The node that was asked.
        parent: NodeId,
        /// The reference that occupies neither of its slots.
        child: Option<NodeId>,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
