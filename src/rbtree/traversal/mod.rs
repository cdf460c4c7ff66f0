//! Single-pass traversals over a tree's nodes.
//!
//! Each producer is an explicit state machine: a stack (or queue, for level
//! order) of nodes still to visit, seeded from the root it was built with.
//! They hold a shared borrow of the tree, so the tree cannot be mutated while
//! one is alive. Once exhausted they keep returning `None`.

use std::iter::FusedIterator;

mod inorder;
mod levelorder;
mod postorder;
mod preorder;

pub use inorder::InorderIter;
pub use levelorder::LevelorderIter;
pub use postorder::PostorderIter;
pub use preorder::PreorderIter;

/// Ascending `(key, value)` pairs of a tree, see [`RBTree::iter`](crate::RBTree::iter).
pub struct Iter<'a, K, V> {
    nodes: InorderIter<'a, K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(nodes: InorderIter<'a, K, V>) -> Self {
        Self { nodes }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|n| (n.key(), n.value()))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

#[cfg(test)]
pub(super) mod tests {
    use crate::RBTree;

    /// 4 2 6 1 3 5 7 only recolors, leaving a perfect tree:
    /// ```text
    ///         4
    ///       /   \
    ///      2     6
    ///     / \   / \
    ///    1   3 5   7
    /// ```
    pub(in crate::rbtree) fn perfect() -> RBTree<i32, char> {
        let mut tree = RBTree::new();
        for (k, v) in [(4, 'd'), (2, 'b'), (6, 'f'), (1, 'a'), (3, 'c'), (5, 'e'), (7, 'g')] {
            tree.insert_node(k, v);
        }
        tree
    }

    /// 10 20 30 40 ends lopsided:
    /// ```text
    ///      20
    ///     /  \
    ///   10    30
    ///           \
    ///            40
    /// ```
    pub(in crate::rbtree) fn lopsided() -> RBTree<i32, ()> {
        let mut tree = RBTree::new();
        for k in [10, 20, 30, 40] {
            tree.insert_node(k, ());
        }
        tree
    }

    pub(in crate::rbtree) fn keys<'a, V: 'a>(nodes: impl Iterator<Item = crate::NodeRef<'a, i32, V>>) -> Vec<i32> {
        nodes.map(|n| *n.key()).collect()
    }

    #[test]
    fn iter_yields_pairs() {
        let tree = perfect();
        let pairs: String = tree.iter().map(|(_, v)| *v).collect();
        assert_eq!(pairs, "abcdefg");
    }

    #[test]
    fn every_order_visits_every_node_once() {
        let mut tree = RBTree::new();
        for k in (0..200).map(|i| (i * 37) % 200) {
            tree.insert_node(k, ());
        }

        let mut orders = [
            keys(tree.inorder_traverse()),
            keys(tree.preorder_traverse()),
            keys(tree.postorder_traverse()),
            keys(tree.levelorder_traverse()),
        ];
        for order in &mut orders {
            assert_eq!(order.len(), 200);
            order.sort();
            assert_eq!(*order, (0..200).collect::<Vec<_>>());
        }
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = RBTree::<i32, ()>::new();
        assert!(!tree.inorder_traverse().has_more());
        assert!(!tree.preorder_traverse().has_more());
        assert!(!tree.postorder_traverse().has_more());
        assert!(!tree.levelorder_traverse().has_more());
        assert!(tree.levelorder_traverse().next().is_none());
        assert_eq!(tree.iter().next(), None);
    }
}
