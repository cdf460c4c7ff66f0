use std::iter::FusedIterator;

use crate::rbtree::node::NodeRef;

/// Post-order traversal: both subtrees, then the node.
///
/// The stack holds a root-to-leaf path that prefers left children. When a
/// left child is popped, the path down its right sibling's subtree is pushed.
pub struct PostorderIter<'a, K, V> {
    stack: Vec<NodeRef<'a, K, V>>,
}

impl<'a, K, V> PostorderIter<'a, K, V> {
    pub fn new(root: Option<NodeRef<'a, K, V>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_leaf_path(root);
        iter
    }

    pub fn has_more(&self) -> bool {
        !self.stack.is_empty()
    }

    fn push_leaf_path(&mut self, mut node: Option<NodeRef<'a, K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left().or_else(|| n.right());
        }
    }
}

impl<'a, K, V> Iterator for PostorderIter<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(&parent) = self.stack.last() {
            if parent.left() == Some(node) {
                self.push_leaf_path(parent.right());
            }
        }
        Some(node)
    }
}

impl<K, V> FusedIterator for PostorderIter<'_, K, V> {}
