#![cfg_attr(not(test), no_std)]

use core::{
  borrow::Borrow,
  fmt,
};

use ordtree_rbtree::{
  Handle,
  IntoIter,
  Iter,
  Policy,
  RbResult,
  RbTree,
};

/// Ordered set of unique elements.
pub struct OrdSet<T> {
  tree: RbTree<T>,
}

impl<T> OrdSet<T> {
  pub const fn new() -> Self {
    Self { tree: RbTree::new() }
  }

  pub fn len(&self) -> usize {
    self.tree.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tree.is_empty()
  }

  pub fn clear(&mut self) {
    self.tree.clear();
  }

  pub fn swap(&mut self, other: &mut Self) {
    self.tree.swap(&mut other.tree);
  }

  pub fn begin(&self) -> Handle {
    self.tree.begin()
  }

  pub fn end(&self) -> Handle {
    self.tree.end()
  }

  pub fn next(&self, at: Handle) -> Handle {
    self.tree.next(at)
  }

  pub fn prev(&self, at: Handle) -> Handle {
    self.tree.prev(at)
  }

  pub fn get_at(&self, at: Handle) -> Option<&T> {
    self.tree.get_at(at)
  }

  pub fn front(&self) -> RbResult<&T> {
    self.tree.front()
  }

  pub fn back(&self) -> RbResult<&T> {
    self.tree.back()
  }

  pub fn iter(&self) -> Iter<'_, T> {
    self.tree.iter()
  }
}

impl<T> OrdSet<T>
where
  T: Ord,
{
  pub fn find<Q>(&self, value: &Q) -> Handle
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.find(value)
  }

  pub fn contains<Q>(&self, value: &Q) -> bool
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.contains(value)
  }

  pub fn get<Q>(&self, value: &Q) -> Option<&T>
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.get(value)
  }

  pub fn lower_bound<Q>(&self, value: &Q) -> Handle
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.lower_bound(value)
  }

  pub fn upper_bound<Q>(&self, value: &Q) -> Handle
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.upper_bound(value)
  }

  /// Inserts `value` unless an equal element is present. Returns the
  /// position of the element now in the set and whether it was inserted.
  pub fn insert(&mut self, value: T) -> (Handle, bool) {
    self.tree.insert(value, Policy::Unique)
  }

  pub fn try_insert(&mut self, value: T) -> RbResult<(Handle, bool)> {
    self.tree.try_insert(value, Policy::Unique)
  }

  pub fn erase(&mut self, at: Handle) -> Handle {
    self.tree.erase(at)
  }

  /// Removes the element equal to `value`; returns 1 if there was one.
  pub fn erase_key<Q>(&mut self, value: &Q) -> usize
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.erase_key(value)
  }

  pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.remove(value)
  }

  pub fn erase_range(&mut self, first: Handle, last: Handle) -> Handle {
    self.tree.erase_range(first, last)
  }

  pub fn pop_front(&mut self) -> RbResult<T> {
    self.tree.pop_front()
  }

  pub fn pop_back(&mut self) -> RbResult<T> {
    self.tree.pop_back()
  }

  pub fn verify(&self) -> RbResult<()> {
    self.tree.verify()
  }
}

impl<T> Default for OrdSet<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for OrdSet<T>
where
  T: Clone,
{
  fn clone(&self) -> Self {
    Self {
      tree: self.tree.clone(),
    }
  }

  fn clone_from(&mut self, source: &Self) {
    self.tree.clone_from(&source.tree);
  }
}

impl<T> fmt::Debug for OrdSet<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

impl<T> PartialEq for OrdSet<T>
where
  T: PartialEq,
{
  fn eq(&self, other: &Self) -> bool {
    self.tree == other.tree
  }
}

impl<T> Eq for OrdSet<T> where T: Eq {}

impl<T> FromIterator<T> for OrdSet<T>
where
  T: Ord,
{
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = T>,
  {
    let mut set = OrdSet::new();
    set.extend(iter);
    set
  }
}

impl<T> Extend<T> for OrdSet<T>
where
  T: Ord,
{
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = T>,
  {
    for value in iter {
      self.insert(value);
    }
  }
}

impl<T, const N: usize> From<[T; N]> for OrdSet<T>
where
  T: Ord,
{
  fn from(values: [T; N]) -> Self {
    values.into_iter().collect()
  }
}

impl<T> IntoIterator for OrdSet<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.tree.into_iter()
  }
}

impl<'set, T> IntoIterator for &'set OrdSet<T> {
  type Item = &'set T;
  type IntoIter = Iter<'set, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(test)]
mod tests;
