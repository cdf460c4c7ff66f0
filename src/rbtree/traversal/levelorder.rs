use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::rbtree::node::NodeRef;

/// Breadth-first traversal, left to right within a level.
///
/// Memory is bounded by the widest level.
pub struct LevelorderIter<'a, K, V> {
    queue: VecDeque<NodeRef<'a, K, V>>,
}

impl<'a, K, V> LevelorderIter<'a, K, V> {
    pub fn new(root: Option<NodeRef<'a, K, V>>) -> Self {
        Self { queue: root.into_iter().collect() }
    }

    pub fn has_more(&self) -> bool {
        !self.queue.is_empty()
    }
}

impl<'a, K, V> Iterator for LevelorderIter<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<K, V> FusedIterator for LevelorderIter<'_, K, V> {}
