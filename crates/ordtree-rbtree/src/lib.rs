#![cfg_attr(not(test), no_std)]

//! Red-black tree with parent links, stored in a per-tree arena.
//!
//! Nodes are addressed by index, so a [`Handle`] is a plain `Copy` value that
//! names one element (or the end position) and can be stepped forwards and
//! backwards through [`RbTree::next`] and [`RbTree::prev`] without any
//! auxiliary stack.

extern crate alloc;

mod arena;
mod assign;
mod erase;
mod insert;
mod iter;
mod node;
mod verify;

use alloc::collections::TryReserveError;
use core::{
  borrow::Borrow,
  cmp::Ordering,
  fmt,
  mem,
};

use arena::Arena;
use node::{
  Dir,
  NodeId,
};

pub use iter::{
  IntoIter,
  Iter,
  IterMut,
};
pub use node::Color;
pub use verify::Violation;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RbError {
  Alloc(TryReserveError),
  Empty,
  Invariant(Violation),
}

pub type RbResult<T> = Result<T, RbError>;

/// What `insert` does when an equal element is already stored.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Policy {
  /// Keep the stored element and report the insert as not performed.
  #[default]
  Unique,
  /// Store the new element after the equal ones along its descent path.
  Multi,
}

/// Position of one element in a tree, or the end position.
///
/// Handles compare by node identity. They are not tied to a borrow of the
/// tree, so they stay usable across mutations; once their element is erased
/// they are stale and must not be used again.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Handle(Option<NodeId>);

impl Handle {
  pub const END: Handle = Handle(None);

  #[inline(always)]
  pub const fn is_end(self) -> bool {
    self.0.is_none()
  }

  #[inline(always)]
  pub(crate) const fn from_id(id: Option<NodeId>) -> Self {
    Self(id)
  }

  #[inline(always)]
  pub(crate) const fn id(self) -> Option<NodeId> {
    self.0
  }
}

pub struct RbTree<T> {
  arena: Arena<T>,
  root: Option<NodeId>,
  len: usize,
}

impl<T> RbTree<T> {
  pub const fn new() -> Self {
    Self {
      arena: Arena::new(),
      root: None,
      len: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn clear(&mut self) {
    log::debug!("clearing tree of {} elements", self.len);
    self.arena.clear();
    self.root = None;
    self.len = 0;
  }

  pub fn swap(&mut self, other: &mut Self) {
    mem::swap(self, other);
  }

  pub fn root(&self) -> Handle {
    Handle(self.root)
  }

  pub fn begin(&self) -> Handle {
    Handle(self.root.map(|root| self.arena.leftmost(root)))
  }

  pub fn end(&self) -> Handle {
    Handle::END
  }

  /// Last element, the position `prev(end())` lands on.
  pub fn last(&self) -> Handle {
    Handle(self.root.map(|root| self.arena.rightmost(root)))
  }

  /// In-order successor. Stepping past the last element or from the end
  /// yields the end.
  pub fn next(&self, at: Handle) -> Handle {
    match self.live(at) {
      Some(id) => Handle(self.arena.successor(id)),
      None => Handle::END,
    }
  }

  /// In-order predecessor. Stepping back from the end yields the last
  /// element; stepping back from the first element yields the end.
  pub fn prev(&self, at: Handle) -> Handle {
    match at.0 {
      None => self.last(),
      Some(_) => match self.live(at) {
        Some(id) => Handle(self.arena.predecessor(id)),
        None => Handle::END,
      },
    }
  }

  pub fn get_at(&self, at: Handle) -> Option<&T> {
    let id = at.0?;
    self.arena.try_node(id).map(|node| &node.data)
  }

  /// Mutable access to a stored element.
  ///
  /// Whatever the element's `Ord` implementation looks at must stay
  /// unchanged, otherwise searches and the ordering of iteration silently
  /// break. Containers built on the tree use this to expose only the parts
  /// of an element that do not take part in ordering.
  pub fn get_at_mut(&mut self, at: Handle) -> Option<&mut T> {
    let id = at.0?;
    self.arena.try_node_mut(id).map(|node| &mut node.data)
  }

  pub fn color_at(&self, at: Handle) -> Option<Color> {
    let id = at.0?;
    self.arena.try_node(id).map(|node| node.link.color())
  }

  pub fn parent_of(&self, at: Handle) -> Handle {
    Handle(self.live(at).and_then(|id| self.arena.parent(id)))
  }

  pub fn left_of(&self, at: Handle) -> Handle {
    Handle(self.live(at).and_then(|id| self.arena.left(id)))
  }

  pub fn right_of(&self, at: Handle) -> Handle {
    Handle(self.live(at).and_then(|id| self.arena.right(id)))
  }

  pub fn front(&self) -> RbResult<&T> {
    self.get_at(self.begin()).ok_or(RbError::Empty)
  }

  pub fn back(&self) -> RbResult<&T> {
    self.get_at(self.last()).ok_or(RbError::Empty)
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self)
  }

  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    IterMut::new(self)
  }

  #[inline]
  fn live(&self, at: Handle) -> Option<NodeId> {
    at.0.filter(|&id| self.arena.is_live(id))
  }

  /// Hangs `new` where `old` was: in `old`'s parent, or as the root.
  fn transplant(&mut self, old: NodeId, new: Option<NodeId>) {
    match (self.arena.parent(old), self.arena.side(old)) {
      (Some(parent), Some(dir)) => self.arena.attach(parent, dir, new),
      _ => {
        self.root = new;
        if let Some(new) = new {
          self.arena.link_mut(new).set_parent(None);
        }
      }
    }
  }

  /// Rotates `pivot` down towards `dir`; its child on the other side takes
  /// its place.
  fn rotate(&mut self, pivot: NodeId, dir: Dir) {
    let Some(up) = self.arena.child(pivot, dir.flip()) else {
      return;
    };
    log::trace!("rotate {:?} at node {}", dir, pivot.index());

    let inner = self.arena.child(up, dir);
    self.arena.attach(pivot, dir.flip(), inner);
    self.transplant(pivot, Some(up));
    self.arena.attach(up, dir, Some(pivot));
  }

  fn rotate_left(&mut self, pivot: NodeId) {
    self.rotate(pivot, Dir::Left);
  }

  fn rotate_right(&mut self, pivot: NodeId) {
    self.rotate(pivot, Dir::Right);
  }

  #[cfg(all(debug_assertions, feature = "self-check"))]
  fn self_check(&self)
  where
    T: Ord,
  {
    if let Err(err) = self.verify() {
      log::error!("red-black invariant broken: {err:?}");
      panic!("red-black invariant broken: {err:?}");
    }
  }

  #[cfg(not(all(debug_assertions, feature = "self-check")))]
  #[inline(always)]
  fn self_check(&self)
  where
    T: Ord,
  {
  }
}

impl<T> RbTree<T> {
  /// Descends with `probe`, which compares the sought key against a stored
  /// element, and returns the first equal element met.
  pub fn find_by<F>(&self, mut probe: F) -> Handle
  where
    F: FnMut(&T) -> Ordering,
  {
    let mut current = self.root;
    while let Some(id) = current {
      current = match probe(self.arena.data(id)) {
        Ordering::Equal => return Handle(Some(id)),
        Ordering::Less => self.arena.left(id),
        Ordering::Greater => self.arena.right(id),
      };
    }
    Handle::END
  }

  /// First element the sought key is not greater than.
  pub fn lower_bound_by<F>(&self, mut probe: F) -> Handle
  where
    F: FnMut(&T) -> Ordering,
  {
    self.bound(|data| probe(data) != Ordering::Greater)
  }

  /// First element the sought key is less than.
  pub fn upper_bound_by<F>(&self, mut probe: F) -> Handle
  where
    F: FnMut(&T) -> Ordering,
  {
    self.bound(|data| probe(data) == Ordering::Less)
  }

  /// Leftmost node for which `goes_left` holds, given that it holds for a
  /// suffix of the in-order sequence.
  fn bound<F>(&self, mut goes_left: F) -> Handle
  where
    F: FnMut(&T) -> bool,
  {
    let mut current = self.root;
    let mut found = None;
    while let Some(id) = current {
      if goes_left(self.arena.data(id)) {
        found = Some(id);
        current = self.arena.left(id);
      } else {
        current = self.arena.right(id);
      }
    }
    Handle(found)
  }
}

impl<T> RbTree<T>
where
  T: Ord,
{
  pub fn find<Q>(&self, key: &Q) -> Handle
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.find_by(|data| key.cmp(data.borrow()))
  }

  pub fn get<Q>(&self, key: &Q) -> Option<&T>
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.get_at(self.find(key))
  }

  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    !self.find(key).is_end()
  }

  /// First element not less than `key`.
  pub fn lower_bound<Q>(&self, key: &Q) -> Handle
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.lower_bound_by(|data| key.cmp(data.borrow()))
  }

  /// First element greater than `key`.
  pub fn upper_bound<Q>(&self, key: &Q) -> Handle
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.upper_bound_by(|data| key.cmp(data.borrow()))
  }
}

impl<T> Default for RbTree<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for RbTree<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T> PartialEq for RbTree<T>
where
  T: PartialEq,
{
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<T> Eq for RbTree<T> where T: Eq {}
