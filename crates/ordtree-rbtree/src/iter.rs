use alloc::vec::{
  self,
  Vec,
};
use core::iter::FusedIterator;

use crate::{
  Policy,
  RbTree,
  node::NodeId,
};

/// In-order iterator over shared references, stepping through parent links.
pub struct Iter<'tree, T> {
  tree: &'tree RbTree<T>,
  front: Option<NodeId>,
  back: Option<NodeId>,
  remaining: usize,
}

impl<'tree, T> Iter<'tree, T> {
  pub(crate) fn new(tree: &'tree RbTree<T>) -> Self {
    Self {
      tree,
      front: tree.begin().id(),
      back: tree.last().id(),
      remaining: tree.len(),
    }
  }
}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Self {
      tree: self.tree,
      front: self.front,
      back: self.back,
      remaining: self.remaining,
    }
  }
}

impl<'tree, T> Iterator for Iter<'tree, T> {
  type Item = &'tree T;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let current = self.front?;
    self.front = self.tree.arena.successor(current);
    self.remaining -= 1;
    Some(self.tree.arena.data(current))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let current = self.back?;
    self.back = self.tree.arena.predecessor(current);
    self.remaining -= 1;
    Some(self.tree.arena.data(current))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// In-order iterator over mutable references.
///
/// The visiting order is fixed up front; the references themselves are
/// handed out from disjoint arena slots.
pub struct IterMut<'tree, T> {
  slots: Vec<Option<&'tree mut T>>,
  order: vec::IntoIter<NodeId>,
}

impl<'tree, T> IterMut<'tree, T> {
  pub(crate) fn new(tree: &'tree mut RbTree<T>) -> Self {
    let order = tree.in_order_ids();
    Self {
      slots: tree.arena.data_slots_mut(),
      order: order.into_iter(),
    }
  }

  fn take(&mut self, id: NodeId) -> Option<&'tree mut T> {
    self.slots.get_mut(id.index()).and_then(Option::take)
  }
}

impl<'tree, T> Iterator for IterMut<'tree, T> {
  type Item = &'tree mut T;

  fn next(&mut self) -> Option<Self::Item> {
    let id = self.order.next()?;
    self.take(id)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.order.size_hint()
  }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    let id = self.order.next_back()?;
    self.take(id)
  }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning in-order iterator.
pub struct IntoIter<T> {
  inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back()
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> RbTree<T> {
  pub(crate) fn in_order_ids(&self) -> Vec<NodeId> {
    let mut ids = Vec::with_capacity(self.len);
    let mut current = self.begin().id();
    while let Some(id) = current {
      ids.push(id);
      current = self.arena.successor(id);
    }
    ids
  }

  /// Empties the tree into a vector in sorted order.
  pub fn into_sorted_vec(mut self) -> Vec<T> {
    let ids = self.in_order_ids();
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
      if let Some(data) = self.arena.free(id) {
        out.push(data);
      }
    }
    self.root = None;
    self.len = 0;
    out
  }
}

impl<T> IntoIterator for RbTree<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter {
      inner: self.into_sorted_vec().into_iter(),
    }
  }
}

impl<'tree, T> IntoIterator for &'tree RbTree<T> {
  type Item = &'tree T;
  type IntoIter = Iter<'tree, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'tree, T> IntoIterator for &'tree mut RbTree<T> {
  type Item = &'tree mut T;
  type IntoIter = IterMut<'tree, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

/// Collecting keeps duplicates; the facades decide their own policy.
impl<T> FromIterator<T> for RbTree<T>
where
  T: Ord,
{
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = T>,
  {
    let mut tree = RbTree::new();
    tree.extend(iter);
    tree
  }
}

impl<T> Extend<T> for RbTree<T>
where
  T: Ord,
{
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = T>,
  {
    for data in iter {
      self.insert(data, Policy::Multi);
    }
  }
}
