use super::*;
use std::collections::BTreeSet;

use ordtree_rbtree::RbError;
use proptest::prelude::*;

fn values(set: &OrdSet<i32>) -> Vec<i32> {
  set.iter().copied().collect()
}

#[test]
fn insert_twice_keeps_one() {
  let mut set = OrdSet::new();
  let (first, inserted) = set.insert(5);
  assert!(inserted);

  let (second, inserted) = set.insert(5);
  assert!(!inserted);
  assert_eq!(first, second);
  assert_eq!(set.len(), 1);
}

#[test]
fn find_and_erase_by_handle() {
  let mut set = OrdSet::from([3, 1, 4, 1, 5, 9, 2, 6]);
  assert_eq!(values(&set), vec![1, 2, 3, 4, 5, 6, 9]);

  let at = set.find(&4);
  assert_eq!(set.get_at(at), Some(&4));

  let next = set.erase(at);
  assert_eq!(set.get_at(next), Some(&5));
  assert!(set.find(&4).is_end());
  assert!(!set.contains(&4));
  set.verify().expect("valid set");
}

#[test]
fn erase_key_counts() {
  let mut set = OrdSet::from([1, 2, 3]);
  assert_eq!(set.erase_key(&2), 1);
  assert_eq!(set.erase_key(&2), 0);
  assert_eq!(set.remove(&3), Some(3));
  assert_eq!(values(&set), vec![1]);
}

#[test]
fn erase_range_between_bounds() {
  let mut set: OrdSet<i32> = (1..=10).collect();
  let first = set.lower_bound(&3);
  let last = set.upper_bound(&7);

  set.erase_range(first, last);

  assert_eq!(values(&set), vec![1, 2, 8, 9, 10]);
  set.verify().expect("valid set");
}

#[test]
fn walk_with_handles() {
  let set = OrdSet::from([20, 10, 30]);
  let mut at = set.begin();
  let mut seen = Vec::new();
  while at != set.end() {
    seen.push(*set.get_at(at).unwrap());
    at = set.next(at);
  }
  assert_eq!(seen, vec![10, 20, 30]);
  assert_eq!(set.get_at(set.prev(set.end())), Some(&30));
}

#[test]
fn front_back_on_empty() {
  let mut set: OrdSet<u8> = OrdSet::new();
  assert_eq!(set.front(), Err(RbError::Empty));
  assert_eq!(set.back(), Err(RbError::Empty));
  assert_eq!(set.pop_front(), Err(RbError::Empty));

  set.extend([7, 3]);
  assert_eq!(set.front(), Ok(&3));
  assert_eq!(set.pop_back(), Ok(7));
}

#[test]
fn borrowed_lookup() {
  let set: OrdSet<String> = ["pear", "apple", "fig"]
    .into_iter()
    .map(String::from)
    .collect();

  assert!(set.contains("fig"));
  assert_eq!(set.get("apple").map(String::as_str), Some("apple"));
  assert!(set.find("plum").is_end());
}

#[test]
fn clone_is_isolated() {
  let original = OrdSet::from([1, 2, 3]);
  let mut copy = original.clone();
  copy.insert(4);
  copy.erase_key(&1);

  assert_eq!(values(&original), vec![1, 2, 3]);
  assert_eq!(values(&copy), vec![2, 3, 4]);
  assert_ne!(original, copy);

  copy.clone_from(&original);
  assert_eq!(original, copy);
}

#[test]
fn debug_formats_as_set() {
  let set = OrdSet::from([2, 1]);
  assert_eq!(format!("{set:?}"), "{1, 2}");
}

#[test]
fn owned_iteration_is_sorted() {
  let set = OrdSet::from([5, 3, 8]);
  let owned: Vec<i32> = set.into_iter().collect();
  assert_eq!(owned, vec![3, 5, 8]);
}

proptest! {
  #[test]
  fn behaves_like_btreeset(
    inserts in proptest::collection::vec(0..200u16, 0..200),
    removals in proptest::collection::vec(0..200u16, 0..100),
  ) {
    let mut set = OrdSet::new();
    let mut model = BTreeSet::new();

    for value in inserts {
      prop_assert_eq!(set.insert(value).1, model.insert(value));
    }
    for value in removals {
      prop_assert_eq!(set.remove(&value), model.take(&value));
    }

    prop_assert!(set.verify().is_ok());
    prop_assert_eq!(set.len(), model.len());
    prop_assert!(set.iter().eq(model.iter()));
  }
}
