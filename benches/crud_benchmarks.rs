use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;
use lexi_tree::{Dictionary, Key, OrderedTree, Record};

const N: usize = 10_000;
// Sorted input builds a chain, so keep the degenerate case smaller.
const CHAIN: usize = 2_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys.sort_unstable();
    keys.dedup();
    // Restore a random insertion order after deduplication.
    let mut y: u64 = 67890;
    for i in (1..keys.len()).rev() {
        y = y.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.swap(i, (y >> 33) as usize % (i + 1));
    }
    keys
}

fn random_labels(n: usize) -> Vec<String> {
    random_keys(n).into_iter().map(|key| format!("w{key:x}")).collect()
}

fn tree_of(keys: &[i64]) -> OrderedTree<(i64, i64)> {
    let mut tree = OrderedTree::with_capacity(keys.len());
    for &key in keys {
        tree.insert((key, key)).unwrap();
    }
    tree
}

// ─── Tree Benchmarks ────────────────────────────────────────────────────────

fn bench_tree_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("tree_insert_random");

    group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
        b.iter(|| tree_of(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &key in &keys {
                map.insert(key, key);
            }
            map
        });
    });

    group.finish();
}

fn bench_tree_insert_sorted(c: &mut Criterion) {
    let keys: Vec<i64> = (0..CHAIN as i64).collect();
    let mut group = c.benchmark_group("tree_insert_sorted");

    group.bench_function(BenchmarkId::new("OrderedTree", CHAIN), |b| {
        b.iter(|| tree_of(&keys));
    });

    group.finish();
}

fn bench_tree_get(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = tree_of(&keys);
    let map: BTreeMap<i64, i64> = keys.iter().map(|&key| (key, key)).collect();
    let mut group = c.benchmark_group("tree_get");

    group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
        b.iter(|| {
            for key in &keys {
                black_box(tree.get(key));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        });
    });

    group.finish();
}

fn bench_tree_remove(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = tree_of(&keys);
    let mut group = c.benchmark_group("tree_remove");

    group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for key in &keys {
                    tree.remove(key).unwrap();
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn bench_tree_successor_walk(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = tree_of(&keys);
    let mut group = c.benchmark_group("tree_successor_walk");

    group.bench_function(BenchmarkId::new("successor", N), |b| {
        b.iter(|| {
            let mut cursor = tree.first().map(|&(key, _)| key);
            while let Some(key) = cursor {
                cursor = tree.successor(&key).map(|&(key, _)| key);
            }
        });
    });

    group.bench_function(BenchmarkId::new("iter", N), |b| {
        b.iter(|| tree.iter().map(|&(key, _)| key).sum::<i64>());
    });

    group.finish();
}

// ─── Dictionary Benchmarks ──────────────────────────────────────────────────

fn bench_dictionary_prefix_scan(c: &mut Criterion) {
    let labels = random_labels(N);
    let mut dictionary = Dictionary::with_capacity(labels.len());
    for label in &labels {
        dictionary.put(Record::new(Key::new(label, 1), label.as_str())).unwrap();
    }
    let mut group = c.benchmark_group("dictionary_prefix_scan");

    for prefix in ["w", "w1", "w1f"] {
        group.bench_function(BenchmarkId::new("prefix", prefix), |b| {
            b.iter(|| black_box(dictionary.prefix_scan(prefix)).len());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tree_insert_random,
    bench_tree_insert_sorted,
    bench_tree_get,
    bench_tree_remove,
    bench_tree_successor_walk,
    bench_dictionary_prefix_scan,
);
criterion_main!(benches);
