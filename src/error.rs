use std::fmt;

use crate::rbtree::node::NodeId;

/// A broken caller contract on one of the node-handle based operations.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The handle does not point at a live node of this tree.
    ///
    /// Handles go stale when their node is deleted, and also when a delete of
    /// a two-child node relocates the successor's entry into another node.
    StaleNode(NodeId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::StaleNode(id) => write!(f, "node handle {id:?} does not refer to a live node"),
        }
    }
}

impl std::error::Error for TreeError {}

/// The first red-black or structural rule found broken by
/// [`RBTree::check_invariants`](crate::RBTree::check_invariants).
///
/// `position` is the in-order index of the offending node.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    RedRoot,
    /// A node's key is not strictly between the bounds set by its ancestors.
    OutOfOrder { position: usize },
    /// A child does not point back at its parent.
    BrokenParentLink { position: usize },
    /// A red node has a red child.
    RedRed { position: usize },
    BlackHeightMismatch { position: usize, left: usize, right: usize },
    /// The number of reachable nodes disagrees with the recorded length.
    LengthMismatch { reachable: usize, recorded: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InvariantViolation::*;
        match *self {
            RedRoot => write!(f, "root is red"),
            OutOfOrder { position } => write!(f, "node #{position} breaks search order"),
            BrokenParentLink { position } => write!(f, "node #{position} has a wrong parent link"),
            RedRed { position } => write!(f, "red node #{position} has a red child"),
            BlackHeightMismatch { position, left, right } => {
                write!(f, "node #{position} has black-heights {left} (left) and {right} (right)")
            }
            LengthMismatch { reachable, recorded } => {
                write!(f, "{reachable} nodes reachable from the root, but length is {recorded}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
