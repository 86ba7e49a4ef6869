use core::iter::FusedIterator;

use ordtree_rbtree as rbtree;

use crate::Pair;

pub struct Iter<'map, K, V> {
  inner: rbtree::Iter<'map, Pair<K, V>>,
}

impl<'map, K, V> Iter<'map, K, V> {
  pub(crate) fn new(inner: rbtree::Iter<'map, Pair<K, V>>) -> Self {
    Self { inner }
  }
}

impl<'map, K, V> Iterator for Iter<'map, K, V> {
  type Item = (&'map K, &'map V);

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(Pair::as_refs)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back().map(Pair::as_refs)
  }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Yields keys by shared reference next to mutable values.
pub struct IterMut<'map, K, V> {
  inner: rbtree::IterMut<'map, Pair<K, V>>,
}

impl<'map, K, V> IterMut<'map, K, V> {
  pub(crate) fn new(inner: rbtree::IterMut<'map, Pair<K, V>>) -> Self {
    Self { inner }
  }
}

impl<'map, K, V> Iterator for IterMut<'map, K, V> {
  type Item = (&'map K, &'map mut V);

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(Pair::split_mut)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back().map(Pair::split_mut)
  }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

pub struct Keys<'map, K, V> {
  inner: rbtree::Iter<'map, Pair<K, V>>,
}

impl<'map, K, V> Keys<'map, K, V> {
  pub(crate) fn new(inner: rbtree::Iter<'map, Pair<K, V>>) -> Self {
    Self { inner }
  }
}

impl<'map, K, V> Iterator for Keys<'map, K, V> {
  type Item = &'map K;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(Pair::key)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back().map(Pair::key)
  }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

pub struct Values<'map, K, V> {
  inner: rbtree::Iter<'map, Pair<K, V>>,
}

impl<'map, K, V> Values<'map, K, V> {
  pub(crate) fn new(inner: rbtree::Iter<'map, Pair<K, V>>) -> Self {
    Self { inner }
  }
}

impl<'map, K, V> Iterator for Values<'map, K, V> {
  type Item = &'map V;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(Pair::value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back().map(Pair::value)
  }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

pub struct IntoIter<K, V> {
  inner: rbtree::IntoIter<Pair<K, V>>,
}

impl<K, V> IntoIter<K, V> {
  pub(crate) fn new(inner: rbtree::IntoIter<Pair<K, V>>) -> Self {
    Self { inner }
  }
}

impl<K, V> Iterator for IntoIter<K, V> {
  type Item = (K, V);

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(Pair::into_tuple)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back().map(Pair::into_tuple)
  }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
