use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;

mod arena;
mod insert;
pub(crate) mod node;
mod remove;
mod rotate;
pub(crate) mod traversal;
mod validate;

use arena::Arena;
use node::{Color, Link, NodeId, NodeRef, Side};
use traversal::{InorderIter, Iter, LevelorderIter, PostorderIter, PreorderIter};

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

/// An ordered map kept balanced by red-black coloring.
///
/// Keys are unique. Search, insertion and deletion are all `O(log(n))`.
///
/// Node handles ([`NodeId`]) can be kept across mutations; operations that
/// take one report [`TreeError::StaleNode`] if its node has since left the
/// tree.
pub struct RBTree<K, V> {
    arena: Arena<K, V>,
    root: Link,
}

impl<K, V> RBTree<K, V> {
    pub fn new() -> Self {
        Self { arena: Arena::new(), root: None }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(|index| self.node_ref(index))
    }

    /// Looks up a node by handle, `None` if it is no longer in the tree.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K, V>> {
        self.arena.resolve(id).map(|index| self.node_ref(index))
    }

    /// Complexity: O(log(n))
    pub fn first(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(|r| self.node_ref(self.min_of(r)))
    }

    /// Complexity: O(log(n))
    pub fn last(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(|r| self.node_ref(self.max_of(r)))
    }

    /// The node with the smallest key in the subtree rooted at `subtree`.
    ///
    /// Complexity: O(log(n))
    pub fn minimum(&self, subtree: NodeId) -> Result<NodeRef<'_, K, V>, TreeError> {
        let index = self.resolve(subtree)?;
        Ok(self.node_ref(self.min_of(index)))
    }

    /// The node with the largest key in the subtree rooted at `subtree`.
    ///
    /// Complexity: O(log(n))
    pub fn maximum(&self, subtree: NodeId) -> Result<NodeRef<'_, K, V>, TreeError> {
        let index = self.resolve(subtree)?;
        Ok(self.node_ref(self.max_of(index)))
    }

    /// The node holding the next larger key, or `Ok(None)` for the last node.
    pub fn successor(&self, node: NodeId) -> Result<Option<NodeRef<'_, K, V>>, TreeError> {
        let index = self.resolve(node)?;
        Ok(self.next_of(index, Side::Right).map(|i| self.node_ref(i)))
    }

    /// The node holding the next smaller key, or `Ok(None)` for the first node.
    pub fn predecessor(&self, node: NodeId) -> Result<Option<NodeRef<'_, K, V>>, TreeError> {
        let index = self.resolve(node)?;
        Ok(self.next_of(index, Side::Left).map(|i| self.node_ref(i)))
    }

    /// Visits nodes in ascending key order.
    pub fn inorder_traverse(&self) -> InorderIter<'_, K, V> {
        InorderIter::new(self.root())
    }

    /// Visits each node before its left subtree, then its right subtree.
    pub fn preorder_traverse(&self) -> PreorderIter<'_, K, V> {
        PreorderIter::new(self.root())
    }

    /// Visits each node after both of its subtrees.
    pub fn postorder_traverse(&self) -> PostorderIter<'_, K, V> {
        PostorderIter::new(self.root())
    }

    /// Visits nodes breadth-first, left to right within each level.
    pub fn levelorder_traverse(&self) -> LevelorderIter<'_, K, V> {
        LevelorderIter::new(self.root())
    }

    /// Ascending `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.inorder_traverse())
    }

    fn node_ref(&self, index: usize) -> NodeRef<'_, K, V> {
        NodeRef::new(&self.arena, index)
    }

    fn resolve(&self, id: NodeId) -> Result<usize, TreeError> {
        self.arena.resolve(id).ok_or_else(|| {
            warn!("rejected stale node handle {id:?}");
            TreeError::StaleNode(id)
        })
    }

    /// Absent children count as black.
    fn color(&self, link: Link) -> Color {
        match link {
            Some(index) => self.arena[index].color,
            None => Color::Black,
        }
    }

    fn set_color(&mut self, index: usize, color: Color) {
        self.arena[index].color = color;
    }

    fn parent(&self, index: usize) -> Link {
        self.arena[index].parent
    }

    /// Which child of `parent` the node `child` is.
    fn side_of(&self, child: Link, parent: usize) -> Side {
        if self.arena[parent].left == child { Side::Left } else { Side::Right }
    }

    fn min_of(&self, mut index: usize) -> usize {
        while let Some(left) = self.arena[index].left {
            index = left;
        }
        index
    }

    fn max_of(&self, mut index: usize) -> usize {
        while let Some(right) = self.arena[index].right {
            index = right;
        }
        index
    }

    /// Successor for `Side::Right`, predecessor for `Side::Left`.
    fn next_of(&self, mut index: usize, side: Side) -> Link {
        if let Some(child) = self.arena[index].child(side) {
            return Some(match side {
                Side::Right => self.min_of(child),
                Side::Left => self.max_of(child),
            })
        }

        // climb until we arrive from the opposite side
        let mut parent = self.parent(index);
        while let Some(p) = parent {
            if self.arena[p].child(side.opposite()) == Some(index) { break }
            index = p;
            parent = self.parent(p);
        }
        parent
    }

    /// Points whatever referenced `old` (its parent's child slot, or the root)
    /// at `new` instead. Does not touch `new`'s parent link.
    fn replace_child(&mut self, parent: Link, old: usize, new: Link) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self.side_of(Some(old), p);
                *self.arena[p].child_mut(side) = new;
            }
        }
    }
}

impl<K: Ord, V> RBTree<K, V> {
    fn find<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.arena[index];
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(index),
            };
        }
        None
    }

    /// Complexity: O(log(n))
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|index| self.node_ref(index))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|index| &self.arena[index].value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|index| &mut self.arena[index].value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }
}

impl<K, V> Default for RBTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RBTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a RBTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
