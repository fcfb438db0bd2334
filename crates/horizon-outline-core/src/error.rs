//! Error types for Horizon Outline.

use crate::structure::NodeId;

/// Result type alias for structural operations.
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Errors raised by structural (builder and query) operations.
///
/// Capability operations on an outline never return these: an unsupported
/// or rejected edit is reported through `false`/`None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    /// The node ID is invalid or the node has been removed.
    #[error("Invalid or removed node ID")]
    InvalidNodeId,

    /// The node exists but does not support children.
    #[error("Node {0:?} does not support children")]
    ChildrenUnsupported(NodeId),

    /// The node is not a direct child of the given parent.
    #[error("Node {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// The expected parent.
        parent: NodeId,
        /// The node that was looked up.
        child: NodeId,
    },

    /// Linking would make a node its own ancestor.
    #[error("Node {parent:?} cannot be the parent of its descendant {id:?}")]
    CycleDetected {
        /// The node being linked.
        id: NodeId,
        /// The rejected parent.
        parent: NodeId,
    },

    /// A child index was past the end of the children sequence.
    #[error("Child index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the children sequence.
        len: usize,
    },
}

impl OutlineError {
    /// Create a not-a-child error.
    pub fn not_a_child(parent: NodeId, child: NodeId) -> Self {
        Self::NotAChild { parent, child }
    }
}
