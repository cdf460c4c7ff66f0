use std::borrow::Borrow;
use std::mem;

use super::RBTree;
use super::node::{Color, Link, Side};

impl<K: Ord, V> RBTree<K, V> {
    /// Removes `key`, returning whether it was present.
    ///
    /// Complexity: O(log(n))
    pub fn delete_node<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Removes `key` and hands back the entry that was stored for it.
    ///
    /// When the node holding `key` has two children, its in-order successor's
    /// entry is moved into it and the successor's node is the one unlinked.
    /// Any [`NodeId`](crate::NodeId) for that successor goes stale.
    ///
    /// Complexity: O(log(n))
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(target) = self.find(key) else {
            debug!("delete rejected: key not present");
            return None
        };

        // the node that physically leaves the tree has at most one child
        let spliced = match (self.arena[target].left, self.arena[target].right) {
            (Some(_), Some(right)) => self.min_of(right),
            _ => target,
        };

        let child = self.arena[spliced].left.or(self.arena[spliced].right);
        let parent = self.parent(spliced);
        if let Some(c) = child {
            self.arena[c].parent = parent;
        }
        self.replace_child(parent, spliced, child);

        let spliced_color = self.arena[spliced].color;
        let mut removed = self.arena.free(spliced);

        if spliced != target {
            // move the successor's entry into the target's node, and carry the
            // target's own entry out in its place
            let kept = &mut self.arena[target];
            mem::swap(&mut kept.key, &mut removed.key);
            mem::swap(&mut kept.value, &mut removed.value);
        }

        if spliced_color == Color::Black {
            self.delete_fixup(child, parent);
        }

        debug!("deleted slot {spliced}, {} nodes left", self.len());
        Some((removed.key, removed.value))
    }

    /// Repays the missing black on the path through `node`.
    ///
    /// `node` may be absent, which is why its parent is tracked separately.
    fn delete_fixup(&mut self, mut node: Link, mut parent: Link) {
        while node != self.root && self.color(node) == Color::Black {
            let Some(p) = parent else { break };
            let side = self.side_of(node, p);

            // the short side is missing a black, so the other side cannot be empty
            let mut sibling = self.sibling(p, side);

            if self.arena[sibling].color == Color::Red {
                trace!("delete fixup: red sibling at slot {sibling}");
                self.set_color(sibling, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                sibling = self.sibling(p, side);
            }

            let near = self.arena[sibling].child(side);
            let far = self.arena[sibling].child(side.opposite());

            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!("delete fixup: black sibling with black children, moving up");
                self.set_color(sibling, Color::Red);
                node = Some(p);
                parent = self.parent(p);
                continue
            }

            if self.color(far) == Color::Black {
                trace!("delete fixup: red near nephew, rotating at sibling");
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.sibling(p, side);
            }

            trace!("delete fixup: red far nephew, rotating at parent");
            self.set_color(sibling, self.arena[p].color);
            self.set_color(p, Color::Black);
            if let Some(far) = self.arena[sibling].child(side.opposite()) {
                self.set_color(far, Color::Black);
            }
            self.rotate(p, side);
            node = self.root;
            parent = None;
        }

        if let Some(node) = node {
            self.set_color(node, Color::Black);
        }
    }

    fn sibling(&self, parent: usize, side: Side) -> usize {
        match self.arena[parent].child(side.opposite()) {
            Some(sibling) => sibling,
            None => unreachable!("double-black node under slot {parent} has no sibling"),
        }
    }
}
