use criterion::{
  BenchmarkId,
  Criterion,
  criterion_group,
  criterion_main,
};
use ordtree::{
  Policy,
  RbTree,
};
use rand::{
  rng,
  seq::SliceRandom,
};
use std::hint::black_box;

fn shuffled(n: u64) -> Vec<u64> {
  let mut keys: Vec<u64> = (0..n).collect();
  keys.shuffle(&mut rng());
  keys
}

fn tree_of(keys: &[u64]) -> RbTree<u64> {
  let mut tree = RbTree::new();
  for &key in keys {
    tree.insert(key, Policy::Unique);
  }
  tree
}

fn bench_insert(c: &mut Criterion) {
  let mut group = c.benchmark_group("rbtree_insert");

  for size in [1_000u64, 10_000] {
    let keys = shuffled(size);
    group.bench_with_input(BenchmarkId::new("random", size), &keys, |b, keys| {
      b.iter(|| black_box(tree_of(keys)));
    });
    group.bench_with_input(BenchmarkId::new("ascending", size), &size, |b, &n| {
      b.iter(|| {
        let mut tree = RbTree::new();
        for key in 0..n {
          tree.insert(black_box(key), Policy::Multi);
        }
        black_box(tree)
      });
    });
  }

  group.finish();
}

fn bench_erase(c: &mut Criterion) {
  let keys = shuffled(10_000);

  c.bench_function("rbtree_erase_10k", |b| {
    b.iter_batched(
      || tree_of(&keys),
      |mut tree| {
        for key in keys.iter() {
          tree.erase_key(key);
        }
        black_box(tree)
      },
      criterion::BatchSize::SmallInput,
    );
  });
}

fn bench_find(c: &mut Criterion) {
  let keys = shuffled(10_000);
  let tree = tree_of(&keys);

  c.bench_function("rbtree_find_10k", |b| {
    b.iter(|| {
      for key in keys.iter() {
        black_box(tree.find(key));
      }
    });
  });
}

fn bench_handle_walk(c: &mut Criterion) {
  let tree = tree_of(&shuffled(10_000));

  c.bench_function("rbtree_handle_walk_10k", |b| {
    b.iter(|| {
      let mut at = tree.begin();
      let mut sum = 0u64;
      while !at.is_end() {
        sum += tree.get_at(at).copied().unwrap_or_default();
        at = tree.next(at);
      }
      black_box(sum)
    });
  });
}

fn bench_assign(c: &mut Criterion) {
  let src = tree_of(&shuffled(10_000));
  let other = tree_of(&shuffled(5_000));

  c.bench_function("rbtree_assign_reuse_10k", |b| {
    b.iter_batched(
      || other.clone(),
      |mut dest| {
        dest.assign(&src);
        black_box(dest)
      },
      criterion::BatchSize::SmallInput,
    );
  });
}

criterion_group!(
  benches,
  bench_insert,
  bench_find,
  bench_erase,
  bench_handle_walk,
  bench_assign
);
criterion_main!(benches);
