use std::fmt;

use super::arena::Arena;

/// A link to another node in the same arena. `None` stands in for the
/// classic nil sentinel and is always treated as black.
pub(crate) type Link = Option<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<K, V> Node<K, V> {
    /// Freshly inserted nodes are always red leaves.
    pub(crate) fn new(key: K, value: V, parent: Link) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A generational handle to a node.
///
/// The handle stays valid until the node is unlinked. A later node that
/// reuses the same slot gets a new generation, so old handles never alias it.
/// Handles are also tied to the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) arena: u64,
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

/// A read-only view of a live node, borrowed from its tree.
///
/// Equality is identity: two `NodeRef`s are equal when they are the same
/// physical node, regardless of key.
pub struct NodeRef<'a, K, V> {
    arena: &'a Arena<K, V>,
    index: usize,
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(arena: &'a Arena<K, V>, index: usize) -> Self {
        Self { arena, index }
    }

    fn node(&self) -> &'a Node<K, V> {
        let arena = self.arena;
        &arena[self.index]
    }

    fn link(&self, link: Link) -> Option<NodeRef<'a, K, V>> {
        link.map(|index| NodeRef::new(self.arena, index))
    }

    pub fn id(&self) -> NodeId {
        self.arena.id_of(self.index)
    }

    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    /// `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K, V>> {
        self.link(self.node().parent)
    }

    pub fn left(&self) -> Option<NodeRef<'a, K, V>> {
        self.link(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, K, V>> {
        self.link(self.node().right)
    }
}

impl<K, V> PartialEq for NodeRef<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.index == other.index
    }
}

impl<K, V> Eq for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .field("color", &self.color())
            .finish()
    }
}
