use btree_core::{BTreeItem, Tree};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Clone)]
struct Entry(i64);

impl BTreeItem for Entry {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.0
    }
}

fn shuffled_keys(n: i64, seed: u64) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    keys.shuffle(&mut rng);
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for t in [2usize, 16, 64] {
        let keys = shuffled_keys(2_000, 7);
        group.bench_with_input(BenchmarkId::from_parameter(t), &t, |b, &t| {
            b.iter(|| {
                let mut tree: Tree<Entry> = Tree::new(t);
                for &k in &keys {
                    tree.insert(Entry(k)).unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for t in [2usize, 16, 64] {
        let keys = shuffled_keys(2_000, 11);
        let mut tree: Tree<Entry> = Tree::new(t);
        for &k in &keys {
            tree.insert(Entry(k)).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(t), &t, |b, _| {
            b.iter(|| {
                for &k in &keys {
                    assert!(tree.search(&k).is_some());
                }
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for t in [2usize, 16, 64] {
        let keys = shuffled_keys(2_000, 13);
        group.bench_with_input(BenchmarkId::from_parameter(t), &t, |b, &t| {
            b.iter_batched(
                || {
                    let mut tree: Tree<Entry> = Tree::new(t);
                    for &k in &keys {
                        tree.insert(Entry(k)).unwrap();
                    }
                    tree
                },
                |mut tree| {
                    for &k in &keys {
                        tree.remove(&k);
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_remove);
criterion_main!(benches);
