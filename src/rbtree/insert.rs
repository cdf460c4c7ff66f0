use std::cmp::Ordering;

use super::RBTree;
use super::node::{Color, Node, Side};

impl<K: Ord, V> RBTree<K, V> {
    /// Inserts `key` with `value`.
    ///
    /// Returns `false` and leaves the tree untouched if `key` is already
    /// present; duplicate keys are never stored.
    ///
    /// Complexity: O(log(n))
    pub fn insert_node(&mut self, key: K, value: V) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(index) = current {
            parent = Some(index);
            let node = &self.arena[index];
            (side, current) = match key.cmp(&node.key) {
                Ordering::Less => (Side::Left, node.left),
                Ordering::Greater => (Side::Right, node.right),
                Ordering::Equal => {
                    debug!("insert rejected: key already present");
                    return false
                }
            };
        }

        let new = self.arena.alloc(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(new),
            Some(p) => *self.arena[p].child_mut(side) = Some(new),
        }

        self.insert_fixup(new);
        debug!("inserted into slot {new}, {} nodes", self.len());
        true
    }

    /// Clears up a red-red link between `node` and its parent, pushing it
    /// towards the root until it disappears or a rotation absorbs it.
    fn insert_fixup(&mut self, mut node: usize) {
        while let Some(mut parent) = self.parent(node) {
            if self.arena[parent].color == Color::Black { break }

            // the root is black, so a red parent always has a parent itself
            let Some(grand) = self.parent(parent) else {
                unreachable!("red node {parent} is the root")
            };
            let side = self.side_of(Some(parent), grand);
            let uncle = self.arena[grand].child(side.opposite());

            if let Some(uncle) = uncle.filter(|&u| self.arena[u].color == Color::Red) {
                trace!("insert fixup: red uncle at slot {uncle}, recoloring");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grand, Color::Red);
                node = grand;
                continue
            }

            if self.arena[parent].child(side.opposite()) == Some(node) {
                trace!("insert fixup: inner child at slot {node}, rotating it outward");
                self.rotate(parent, side);
                (node, parent) = (parent, node);
            }

            trace!("insert fixup: outer child at slot {node}, rotating at grandparent");
            self.set_color(parent, Color::Black);
            self.set_color(grand, Color::Red);
            self.rotate(grand, side.opposite());
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn duplicate_is_rejected() {
        let mut tree = RBTree::new();
        assert!(tree.insert_node(1, "first"));
        assert!(!tree.insert_node(1, "second"));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(&1), Some(&"first"));
        tree.check_invariants().unwrap();
    }

    #[test]
    fn insert_then_search() {
        let mut tree = RBTree::new();
        for k in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            assert!(tree.insert_node(k, k * 100));
            let found = tree.search(&k).unwrap();
            assert_eq!((*found.key(), *found.value()), (k, k * 100));
            tree.check_invariants().unwrap();
        }
        assert_eq!(tree.len(), 9);
    }

    #[test]
    fn inner_child_double_rotation() {
        // 30 then 10 then 20: 20 lands as the inner (right) child of 10
        let mut tree = RBTree::new();
        for k in [30, 10, 20] {
            tree.insert_node(k, ());
        }
        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 20);
        assert!(root.is_black());
        assert!(root.left().unwrap().is_red());
        assert!(root.right().unwrap().is_red());
        assert_eq!(*root.left().unwrap().key(), 10);
        assert_eq!(*root.right().unwrap().key(), 30);
    }

    #[test]
    fn sorted_inserts_stay_shallow() {
        let mut tree = RBTree::new();
        let n = 1 << 12;
        for k in 0..n {
            tree.insert_node(k, ());
        }
        let black_height = tree.check_invariants().unwrap();

        fn height(node: Option<crate::NodeRef<'_, i32, ()>>) -> usize {
            node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
        }
        let h = height(tree.root());
        // height <= 2 log2(n + 1)
        assert!(h <= 2 * 13, "height {h} too large");
        assert!(h <= 2 * black_height);
    }

    #[test]
    fn random_inserts_keep_invariants() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
        let mut tree = RBTree::new();
        let mut expected = std::collections::BTreeSet::new();

        for _ in 0..2000 {
            let k: u32 = rng.gen_range(0..1000);
            assert_eq!(tree.insert_node(k, ()), expected.insert(k));
            tree.check_invariants().unwrap();
        }

        let keys: Vec<_> = tree.inorder_traverse().map(|n| *n.key()).collect();
        assert_eq!(keys, expected.into_iter().collect::<Vec<_>>());
    }
}
