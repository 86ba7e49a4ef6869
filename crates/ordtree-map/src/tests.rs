use super::*;
use std::collections::BTreeMap;

use proptest::prelude::*;

fn entries(map: &OrdMap<i32, &'static str>) -> Vec<(i32, &'static str)> {
  map.iter().map(|(key, value)| (*key, *value)).collect()
}

#[test]
fn insert_keeps_existing_value() {
  let mut map = OrdMap::new();
  let (first, inserted) = map.insert(1, "one");
  assert!(inserted);

  let (second, inserted) = map.insert(1, "uno");
  assert!(!inserted);
  assert_eq!(first, second);
  assert_eq!(map.get(&1), Some(&"one"));
  assert_eq!(map.len(), 1);
}

#[test]
fn insert_or_assign_overwrites() {
  let mut map = OrdMap::new();
  assert_eq!(map.insert_or_assign(1, "one"), None);
  assert_eq!(map.insert_or_assign(1, "uno"), Some("one"));
  assert_eq!(entries(&map), vec![(1, "uno")]);
}

#[test]
fn checked_lookup_reports_missing_key() {
  let mut map = OrdMap::from([(1, "one"), (2, "two")]);
  assert_eq!(map.at(&2), Ok(&"two"));
  assert_eq!(map.at(&3), Err(MapError::MissingKey));
  assert_eq!(map.at_mut(&3), Err(MapError::MissingKey));

  *map.at_mut(&1).unwrap() = "eins";
  assert_eq!(map[&1], "eins");
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_panics_on_missing_key() {
  let map = OrdMap::from([(1, "one")]);
  let _ = map[&2];
}

#[test]
fn default_entries_count_words() {
  let mut counts: OrdMap<&str, usize> = OrdMap::new();
  for word in "b a b c b a".split(' ') {
    *counts.get_or_insert_default(word) += 1;
  }

  let seen: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (*k, *v)).collect();
  assert_eq!(seen, vec![("a", 2), ("b", 3), ("c", 1)]);
  counts.verify().expect("valid map");
}

#[test]
fn iter_mut_updates_values_in_key_order() {
  let mut map: OrdMap<i32, i32> = (1..=5).map(|k| (k, 0)).collect();
  for (key, value) in map.iter_mut() {
    *value = key * 10;
  }
  for (_, value) in &mut map {
    *value += 1;
  }

  assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![11, 21, 31, 41, 51]);
  assert_eq!(map.keys().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn string_keys_with_str_lookup() {
  let mut map: OrdMap<String, u32> = OrdMap::new();
  map.insert("pear".to_string(), 3);
  map.insert("apple".to_string(), 1);

  assert!(map.contains_key("apple"));
  assert_eq!(map.get("pear"), Some(&3));
  assert_eq!(map.remove_entry("apple"), Some(("apple".to_string(), 1)));
  assert!(!map.contains_key("apple"));
}

#[test]
fn handles_walk_entries() {
  let mut map = OrdMap::from([(3, "c"), (1, "a"), (2, "b")]);
  let at = map.find(&2);
  assert_eq!(map.get_at(at), Some((&2, &"b")));

  if let Some(value) = map.value_at_mut(at) {
    *value = "B";
  }
  assert_eq!(map.get_at(map.prev(at)), Some((&1, &"a")));
  assert_eq!(map.get_at(map.next(at)), Some((&3, &"c")));

  let next = map.erase(at);
  assert_eq!(map.get_at(next), Some((&3, &"c")));
  assert_eq!(entries(&map), vec![(1, "a"), (3, "c")]);
}

#[test]
fn erase_range_and_pops() {
  let mut map: OrdMap<i32, &str> = (1..=6).map(|k| (k, "x")).collect();
  let first = map.lower_bound(&2);
  let last = map.upper_bound(&4);
  map.erase_range(first, last);

  assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 5, 6]);
  assert_eq!(map.pop_front(), Ok((1, "x")));
  assert_eq!(map.pop_back(), Ok((6, "x")));
  assert_eq!(map.erase_key(&5), 1);
  assert_eq!(map.erase_key(&5), 0);
  assert_eq!(map.pop_front(), Err(MapError::Tree(RbError::Empty)));
}

#[test]
fn clone_is_isolated() {
  let original = OrdMap::from([(1, "one"), (2, "two")]);
  let mut copy = original.clone();
  copy.insert_or_assign(1, "uno");
  copy.insert(3, "three");

  assert_eq!(entries(&original), vec![(1, "one"), (2, "two")]);
  assert_eq!(entries(&copy), vec![(1, "uno"), (2, "two"), (3, "three")]);

  copy.clone_from(&original);
  assert_eq!(copy, original);
}

#[test]
fn debug_formats_as_map() {
  let map = OrdMap::from([(2, "b"), (1, "a")]);
  assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
}

#[test]
fn owned_iteration_yields_pairs() {
  let map = OrdMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
  let mut owned = map.into_iter();
  assert_eq!(owned.len(), 3);
  assert_eq!(owned.next_back(), Some((3, 'c')));
  assert_eq!(owned.collect::<Vec<_>>(), vec![(1, 'a'), (2, 'b')]);
}

proptest! {
  #[test]
  fn behaves_like_btreemap(
    ops in proptest::collection::vec((0..3u8, 0..64u16, any::<u32>()), 0..300),
  ) {
    let mut map = OrdMap::new();
    let mut model = BTreeMap::new();

    for (op, key, value) in ops {
      match op {
        0 => {
          prop_assert_eq!(map.insert_or_assign(key, value), model.insert(key, value));
        }
        1 => {
          prop_assert_eq!(map.remove(&key), model.remove(&key));
        }
        _ => {
          prop_assert_eq!(map.get(&key), model.get(&key));
        }
      }
    }

    prop_assert!(map.verify().is_ok());
    prop_assert_eq!(map.len(), model.len());
    prop_assert!(map.iter().eq(model.iter()));
  }
}
