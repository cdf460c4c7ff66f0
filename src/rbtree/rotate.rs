use super::RBTree;
use super::node::Side;

impl<K, V> RBTree<K, V> {
    /// Rotates the subtree at `x` toward `dir`.
    ///
    /// `rotate(x, Side::Left)` is the usual left rotation: `x`'s right child
    /// takes `x`'s place and `x` becomes its left child. The child's inner
    /// subtree is handed over to `x`, so the in-order sequence is unchanged.
    ///
    /// ```text
    ///       x                y
    ///      / \              / \
    ///     a   y     =>     x   c
    ///        / \          / \
    ///       b   c        a   b
    /// ```
    pub(super) fn rotate(&mut self, x: usize, dir: Side) {
        let Some(y) = self.arena[x].child(dir.opposite()) else {
            unreachable!("rotation at node {x} without a {:?} child", dir.opposite())
        };
        trace!("rotate {dir:?} at slot {x} (promoting slot {y})");

        let inner = self.arena[y].child(dir);
        *self.arena[x].child_mut(dir.opposite()) = inner;
        if let Some(b) = inner {
            self.arena[b].parent = Some(x);
        }

        let parent = self.parent(x);
        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        *self.arena[y].child_mut(dir) = Some(x);
        self.arena[x].parent = Some(y);
    }
}
