use alloc::{
  collections::TryReserveError,
  vec::Vec,
};
use core::mem;

use crate::node::{
  Color,
  Dir,
  Link,
  Node,
  NodeId,
};

#[derive(Debug)]
enum Slot<T> {
  Occupied(Node<T>),
  Vacant { next_free: Option<NodeId> },
}

/// Owns every node of one tree. Vacant slots are threaded into a free list
/// so releasing a node never allocates.
#[derive(Debug)]
pub(crate) struct Arena<T> {
  slots: Vec<Slot<T>>,
  free: Option<NodeId>,
  vacant: usize,
  /// Makes every reservation fail so the allocation error paths can run.
  #[cfg(test)]
  pub(crate) fail_reserve: bool,
}

impl<T> Arena<T> {
  pub(crate) const fn new() -> Self {
    Self {
      slots: Vec::new(),
      free: None,
      vacant: 0,
      #[cfg(test)]
      fail_reserve: false,
    }
  }

  pub(crate) fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Makes sure `additional` nodes can be created without the arena
  /// growing its backing storage.
  pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
    #[cfg(test)]
    {
      if self.fail_reserve {
        return Vec::<u8>::new().try_reserve(usize::MAX);
      }
    }

    let needed = additional.saturating_sub(self.vacant);
    if needed == 0 {
      return Ok(());
    }
    self.slots.try_reserve(needed)
  }

  pub(crate) fn alloc(&mut self, data: T) -> NodeId {
    let node = Node::new(data);
    match self.free {
      Some(id) => {
        let slot = &mut self.slots[id.index()];
        if let Slot::Vacant { next_free } = *slot {
          self.free = next_free;
        }
        *slot = Slot::Occupied(node);
        self.vacant -= 1;
        id
      }
      None => {
        let id = NodeId::new(self.slots.len());
        self.slots.push(Slot::Occupied(node));
        id
      }
    }
  }

  /// Releases a node and hands its payload back. Links of the neighbours are
  /// not touched; the caller unlinks first.
  pub(crate) fn free(&mut self, id: NodeId) -> Option<T> {
    let slot = self.slots.get_mut(id.index())?;
    if matches!(slot, Slot::Vacant { .. }) {
      return None;
    }
    let old = mem::replace(
      slot,
      Slot::Vacant {
        next_free: self.free,
      },
    );
    self.free = Some(id);
    self.vacant += 1;
    match old {
      Slot::Occupied(node) => Some(node.data),
      Slot::Vacant { .. } => None,
    }
  }

  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.free = None;
    self.vacant = 0;
  }

  pub(crate) fn is_live(&self, id: NodeId) -> bool {
    matches!(self.slots.get(id.index()), Some(Slot::Occupied(_)))
  }

  pub(crate) fn try_node(&self, id: NodeId) -> Option<&Node<T>> {
    match self.slots.get(id.index()) {
      Some(Slot::Occupied(node)) => Some(node),
      _ => None,
    }
  }

  pub(crate) fn try_node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
    match self.slots.get_mut(id.index()) {
      Some(Slot::Occupied(node)) => Some(node),
      _ => None,
    }
  }

  /// Ids reached through live links always name occupied slots.
  #[inline]
  pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
    match &self.slots[id.index()] {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => unreachable!("link to vacant slot {}", id.index()),
    }
  }

  #[inline]
  pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
    match &mut self.slots[id.index()] {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => unreachable!("link to vacant slot {}", id.index()),
    }
  }

  #[inline]
  pub(crate) fn data(&self, id: NodeId) -> &T {
    &self.node(id).data
  }

  #[inline]
  pub(crate) fn link(&self, id: NodeId) -> &Link {
    &self.node(id).link
  }

  #[inline]
  pub(crate) fn link_mut(&mut self, id: NodeId) -> &mut Link {
    &mut self.node_mut(id).link
  }

  #[inline]
  pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.link(id).parent()
  }

  #[inline]
  pub(crate) fn left(&self, id: NodeId) -> Option<NodeId> {
    self.link(id).left()
  }

  #[inline]
  pub(crate) fn right(&self, id: NodeId) -> Option<NodeId> {
    self.link(id).right()
  }

  #[inline]
  pub(crate) fn child(&self, id: NodeId, dir: Dir) -> Option<NodeId> {
    self.link(id).child(dir)
  }

  #[inline]
  pub(crate) fn color(&self, id: NodeId) -> Color {
    self.link(id).color()
  }

  #[inline]
  pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
    self.link_mut(id).set_color(color);
  }

  /// Nil leaves count as black.
  #[inline]
  pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
    id.is_some_and(|id| self.color(id).is_red())
  }

  pub(crate) fn attach_left(&mut self, parent: NodeId, child: Option<NodeId>) {
    self.attach(parent, Dir::Left, child);
  }

  pub(crate) fn attach_right(&mut self, parent: NodeId, child: Option<NodeId>) {
    self.attach(parent, Dir::Right, child);
  }

  pub(crate) fn attach(&mut self, parent: NodeId, dir: Dir, child: Option<NodeId>) {
    self.link_mut(parent).set_child(dir, child);
    if let Some(child) = child {
      self.link_mut(child).set_parent(Some(parent));
    }
  }

  pub(crate) fn is_left_child(&self, id: NodeId) -> bool {
    self
      .parent(id)
      .is_some_and(|parent| self.left(parent) == Some(id))
  }

  pub(crate) fn is_right_child(&self, id: NodeId) -> bool {
    self
      .parent(id)
      .is_some_and(|parent| self.right(parent) == Some(id))
  }

  /// Side of its parent `id` hangs from, `None` for a root.
  pub(crate) fn side(&self, id: NodeId) -> Option<Dir> {
    if self.is_left_child(id) {
      Some(Dir::Left)
    } else if self.is_right_child(id) {
      Some(Dir::Right)
    } else {
      None
    }
  }

  pub(crate) fn sibling(&self, id: NodeId) -> Option<NodeId> {
    let parent = self.parent(id)?;
    match self.side(id)? {
      Dir::Left => self.right(parent),
      Dir::Right => self.left(parent),
    }
  }

  /// Follows `dir` links down to the last node.
  pub(crate) fn extreme(&self, mut id: NodeId, dir: Dir) -> NodeId {
    while let Some(next) = self.child(id, dir) {
      id = next;
    }
    id
  }

  pub(crate) fn leftmost(&self, id: NodeId) -> NodeId {
    self.extreme(id, Dir::Left)
  }

  pub(crate) fn rightmost(&self, id: NodeId) -> NodeId {
    self.extreme(id, Dir::Right)
  }

  /// In-order neighbour in direction `dir` using only parent links:
  /// `Dir::Right` is the successor, `Dir::Left` the predecessor.
  pub(crate) fn step(&self, id: NodeId, dir: Dir) -> Option<NodeId> {
    if let Some(child) = self.child(id, dir) {
      return Some(self.extreme(child, dir.flip()));
    }

    let mut current = id;
    while let Some(parent) = self.parent(current) {
      if self.child(parent, dir) != Some(current) {
        return Some(parent);
      }
      current = parent;
    }
    None
  }

  pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
    self.step(id, Dir::Right)
  }

  pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
    self.step(id, Dir::Left)
  }

  /// Frees `root` and everything below it with an explicit post-order
  /// worklist. The caller detaches `root` from its parent.
  pub(crate) fn free_subtree(&mut self, root: NodeId) -> usize {
    let mut freed = 0;
    let mut scratch = Vec::new();
    scratch.push((root, false));

    while let Some((id, expanded)) = scratch.pop() {
      if expanded {
        self.free(id);
        freed += 1;
        continue;
      }

      scratch.push((id, true));
      let link = *self.link(id);
      if let Some(right) = link.right() {
        scratch.push((right, false));
      }
      if let Some(left) = link.left() {
        scratch.push((left, false));
      }
    }

    freed
  }

  /// Payload slots in arena order, for callers that need disjoint mutable
  /// access to many nodes at once.
  pub(crate) fn data_slots_mut(&mut self) -> Vec<Option<&mut T>> {
    self
      .slots
      .iter_mut()
      .map(|slot| match slot {
        Slot::Occupied(node) => Some(&mut node.data),
        Slot::Vacant { .. } => None,
      })
      .collect()
  }
}
