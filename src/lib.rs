//! An ordered key-value map backed by a red-black tree.
//!
//! Nodes live in an arena and link to each other through slot indices, so
//! the parent back-links never form an ownership cycle. Every mutation keeps
//! the tree balanced, giving `O(log(n))` search, insertion and deletion.
//!
//! ```
//! use redblack::RBTree;
//!
//! let mut tree = RBTree::new();
//! assert!(tree.insert_node(10, "ten"));
//! assert!(tree.insert_node(20, "twenty"));
//! assert!(tree.insert_node(30, "thirty"));
//!
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 20);
//!
//! let keys: Vec<_> = tree.inorder_traverse().map(|n| *n.key()).collect();
//! assert_eq!(keys, [10, 20, 30]);
//! ```

#![deny(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
pub mod logging;
mod rbtree;

pub use error::{InvariantViolation, TreeError};
pub use rbtree::node::{Color, NodeId, NodeRef};
pub use rbtree::traversal::{InorderIter, Iter, LevelorderIter, PostorderIter, PreorderIter};
pub use rbtree::RBTree;
