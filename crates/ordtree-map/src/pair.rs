use core::{
  borrow::Borrow,
  cmp::Ordering,
};

use getset::{
  Getters,
  MutGetters,
};

/// Element stored by [`OrdMap`](crate::OrdMap). Equality and ordering look
/// at the key only, and only the value has a mutable accessor.
#[derive(Debug, Clone, Getters, MutGetters)]
pub struct Pair<K, V> {
  #[getset(get = "pub")]
  key: K,
  #[getset(get = "pub", get_mut = "pub")]
  value: V,
}

impl<K, V> Pair<K, V> {
  pub fn new(key: K, value: V) -> Self {
    Self { key, value }
  }

  pub fn as_refs(&self) -> (&K, &V) {
    (&self.key, &self.value)
  }

  pub(crate) fn split_mut(&mut self) -> (&K, &mut V) {
    (&self.key, &mut self.value)
  }

  pub fn into_tuple(self) -> (K, V) {
    (self.key, self.value)
  }
}

impl<K, V> PartialEq for Pair<K, V>
where
  K: PartialEq,
{
  fn eq(&self, other: &Self) -> bool {
    self.key == other.key
  }
}

impl<K, V> Eq for Pair<K, V> where K: Eq {}

impl<K, V> PartialOrd for Pair<K, V>
where
  K: Ord,
{
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<K, V> Ord for Pair<K, V>
where
  K: Ord,
{
  fn cmp(&self, other: &Self) -> Ordering {
    self.key.cmp(&other.key)
  }
}

impl<K, V> Borrow<K> for Pair<K, V> {
  fn borrow(&self) -> &K {
    &self.key
  }
}
