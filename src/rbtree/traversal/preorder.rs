use std::iter::FusedIterator;

use crate::rbtree::node::NodeRef;

/// Pre-order traversal: a node, then its left subtree, then its right subtree.
pub struct PreorderIter<'a, K, V> {
    stack: Vec<NodeRef<'a, K, V>>,
}

impl<'a, K, V> PreorderIter<'a, K, V> {
    pub fn new(root: Option<NodeRef<'a, K, V>>) -> Self {
        Self { stack: root.into_iter().collect() }
    }

    pub fn has_more(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<'a, K, V> Iterator for PreorderIter<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right goes in first so the left subtree comes out first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<K, V> FusedIterator for PreorderIter<'_, K, V> {}
