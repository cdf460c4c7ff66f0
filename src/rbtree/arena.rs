use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use super::node::{Node, NodeId};

struct Slot<K, V> {
    generation: u32,
    node: Option<Node<K, V>>,
}

/// Slot storage for the nodes of one tree.
///
/// Freed slots are recycled through a free list. Every free bumps the slot's
/// generation, which is what makes stale [`NodeId`]s detectable. Each arena
/// also gets a process-unique id, so a handle from another tree never resolves.
pub(crate) struct Arena<K, V> {
    id: u64,
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
    len: usize,
}

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> usize {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                debug_assert!(self.slots[index].node.is_none());
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot { generation: 0, node: Some(node) });
                self.slots.len() - 1
            }
        }
    }

    /// Takes the node out of its slot. The caller must already have unlinked it.
    pub(crate) fn free(&mut self, index: usize) -> Node<K, V> {
        let slot = &mut self.slots[index];
        let Some(node) = slot.node.take() else {
            panic!("double free of arena slot {index}")
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        node
    }

    pub(crate) fn id_of(&self, index: usize) -> NodeId {
        NodeId { arena: self.id, index, generation: self.slots[index].generation }
    }

    /// Maps a handle back to its slot, if it was issued by this arena and the
    /// node it names is still alive.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<usize> {
        if id.arena != self.id {
            return None
        }
        let slot = self.slots.get(id.index)?;
        (slot.node.is_some() && slot.generation == id.generation).then_some(id.index)
    }

    /// Drops every node but keeps the slots, so outstanding handles go stale
    /// instead of matching whatever gets inserted next.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index);
        }
        self.len = 0;
    }
}

impl<K, V> Index<usize> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, index: usize) -> &Self::Output {
        match &self.slots[index].node {
            Some(node) => node,
            None => panic!("arena slot {index} is empty"),
        }
    }
}

impl<K, V> IndexMut<usize> for Arena<K, V> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match &mut self.slots[index].node {
            Some(node) => node,
            None => panic!("arena slot {index} is empty"),
        }
    }
}
