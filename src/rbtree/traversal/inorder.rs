use std::iter::FusedIterator;

use crate::rbtree::node::NodeRef;

/// In-order (ascending key) traversal.
///
/// The stack holds the path down to the next node; memory is bounded by the
/// tree height.
pub struct InorderIter<'a, K, V> {
    stack: Vec<NodeRef<'a, K, V>>,
}

impl<'a, K, V> InorderIter<'a, K, V> {
    pub fn new(root: Option<NodeRef<'a, K, V>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_path(root);
        iter
    }

    pub fn has_more(&self) -> bool {
        !self.stack.is_empty()
    }

    fn push_left_path(&mut self, mut node: Option<NodeRef<'a, K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K, V> Iterator for InorderIter<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_path(node.right());
        Some(node)
    }
}

impl<K, V> FusedIterator for InorderIter<'_, K, V> {}
