#![cfg_attr(not(test), no_std)]

//! Ordered map over the red-black tree. Elements are [`Pair`]s ordered by
//! key alone; values are reachable mutably, keys never are.

mod iter;
mod pair;

use core::{
  borrow::Borrow,
  fmt,
  mem,
  ops::Index,
};

use ordtree_rbtree::{
  Handle,
  Policy,
  RbError,
  RbResult,
  RbTree,
};

pub use iter::{
  IntoIter,
  Iter,
  IterMut,
  Keys,
  Values,
};
pub use pair::Pair;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MapError {
  MissingKey,
  Tree(RbError),
}

impl From<RbError> for MapError {
  fn from(err: RbError) -> Self {
    MapError::Tree(err)
  }
}

pub type MapResult<T> = Result<T, MapError>;

pub struct OrdMap<K, V> {
  tree: RbTree<Pair<K, V>>,
}

impl<K, V> OrdMap<K, V> {
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

  pub fn get_at(&self, at: Handle) -> Option<(&K, &V)> {
    self.tree.get_at(at).map(Pair::as_refs)
  }

  pub fn value_at_mut(&mut self, at: Handle) -> Option<&mut V> {
    self.tree.get_at_mut(at).map(Pair::value_mut)
  }

  pub fn front(&self) -> MapResult<(&K, &V)> {
    Ok(self.tree.front().map(Pair::as_refs)?)
  }

  pub fn back(&self) -> MapResult<(&K, &V)> {
    Ok(self.tree.back().map(Pair::as_refs)?)
  }

  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter::new(self.tree.iter())
  }

  pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
    IterMut::new(self.tree.iter_mut())
  }

  pub fn keys(&self) -> Keys<'_, K, V> {
    Keys::new(self.tree.iter())
  }

  pub fn values(&self) -> Values<'_, K, V> {
    Values::new(self.tree.iter())
  }
}

impl<K, V> OrdMap<K, V>
where
  K: Ord,
{
  pub fn find<Q>(&self, key: &Q) -> Handle
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.find_by(|pair| key.cmp(pair.key().borrow()))
  }

  pub fn lower_bound<Q>(&self, key: &Q) -> Handle
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.lower_bound_by(|pair| key.cmp(pair.key().borrow()))
  }

  pub fn upper_bound<Q>(&self, key: &Q) -> Handle
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.upper_bound_by(|pair| key.cmp(pair.key().borrow()))
  }

  pub fn contains_key<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    !self.find(key).is_end()
  }

  pub fn get<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.tree.get_at(self.find(key)).map(Pair::value)
  }

  pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let at = self.find(key);
    self.value_at_mut(at)
  }

  /// Checked lookup: a missing key is an error rather than `None`.
  pub fn at<Q>(&self, key: &Q) -> MapResult<&V>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.get(key).ok_or(MapError::MissingKey)
  }

  pub fn at_mut<Q>(&mut self, key: &Q) -> MapResult<&mut V>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.get_mut(key).ok_or(MapError::MissingKey)
  }

  /// Inserts the pair unless `key` is present, in which case the stored value
  /// is kept. Returns the position of the entry for `key` and whether the
  /// pair was inserted.
  pub fn insert(&mut self, key: K, value: V) -> (Handle, bool) {
    self.tree.insert(Pair::new(key, value), Policy::Unique)
  }

  pub fn try_insert(&mut self, key: K, value: V) -> MapResult<(Handle, bool)> {
    Ok(self.tree.try_insert(Pair::new(key, value), Policy::Unique)?)
  }

  /// Stores `value` under `key`, handing back the value it replaced.
  pub fn insert_or_assign(&mut self, key: K, value: V) -> Option<V> {
    let at = self.find(&key);
    match self.value_at_mut(at) {
      Some(slot) => Some(mem::replace(slot, value)),
      None => {
        self.insert(key, value);
        None
      }
    }
  }

  /// Value under `key`, inserting `V::default()` first if the key is absent.
  pub fn get_or_insert_default(&mut self, key: K) -> &mut V
  where
    V: Default,
  {
    let mut at = self.find(&key);
    if at.is_end() {
      at = self.insert(key, V::default()).0;
    }
    match self.tree.get_at_mut(at) {
      Some(pair) => pair.value_mut(),
      None => unreachable!("entry vanished right after lookup"),
    }
  }

  pub fn erase(&mut self, at: Handle) -> Handle {
    self.tree.erase(at)
  }

  /// Removes the entry for `key`; returns 1 if there was one.
  pub fn erase_key<Q>(&mut self, key: &Q) -> usize
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let at = self.find(key);
    if at.is_end() {
      return 0;
    }
    self.tree.erase(at);
    1
  }

  pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.remove_entry(key).map(|(_, value)| value)
  }

  pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
  where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let at = self.find(key);
    self.tree.take(at).map(Pair::into_tuple)
  }

  pub fn erase_range(&mut self, first: Handle, last: Handle) -> Handle {
    self.tree.erase_range(first, last)
  }

  pub fn pop_front(&mut self) -> MapResult<(K, V)> {
    Ok(self.tree.pop_front().map(Pair::into_tuple)?)
  }

  pub fn pop_back(&mut self) -> MapResult<(K, V)> {
    Ok(self.tree.pop_back().map(Pair::into_tuple)?)
  }

  pub fn verify(&self) -> RbResult<()> {
    self.tree.verify()
  }
}

impl<K, V> Default for OrdMap<K, V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V> Clone for OrdMap<K, V>
where
  K: Clone,
  V: Clone,
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

impl<K, V> fmt::Debug for OrdMap<K, V>
where
  K: fmt::Debug,
  V: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

impl<K, V> PartialEq for OrdMap<K, V>
where
  K: PartialEq,
  V: PartialEq,
{
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len() && self.iter().eq(other.iter())
  }
}

impl<K, V> Eq for OrdMap<K, V>
where
  K: Eq,
  V: Eq,
{
}

impl<K, V, Q> Index<&Q> for OrdMap<K, V>
where
  K: Ord + Borrow<Q>,
  Q: Ord + ?Sized,
{
  type Output = V;

  fn index(&self, key: &Q) -> &V {
    match self.get(key) {
      Some(value) => value,
      None => panic!("no entry found for key"),
    }
  }
}

/// Later pairs with a key already present are dropped, as with `insert`.
impl<K, V> FromIterator<(K, V)> for OrdMap<K, V>
where
  K: Ord,
{
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
  {
    let mut map = OrdMap::new();
    map.extend(iter);
    map
  }
}

impl<K, V> Extend<(K, V)> for OrdMap<K, V>
where
  K: Ord,
{
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = (K, V)>,
  {
    for (key, value) in iter {
      self.insert(key, value);
    }
  }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrdMap<K, V>
where
  K: Ord,
{
  fn from(pairs: [(K, V); N]) -> Self {
    pairs.into_iter().collect()
  }
}

impl<K, V> IntoIterator for OrdMap<K, V> {
  type Item = (K, V);
  type IntoIter = IntoIter<K, V>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self.tree.into_iter())
  }
}

impl<'map, K, V> IntoIterator for &'map OrdMap<K, V> {
  type Item = (&'map K, &'map V);
  type IntoIter = Iter<'map, K, V>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'map, K, V> IntoIterator for &'map mut OrdMap<K, V> {
  type Item = (&'map K, &'map mut V);
  type IntoIter = IterMut<'map, K, V>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

#[cfg(test)]
mod tests;
