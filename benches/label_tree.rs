use criterion::{black_box, criterion_group, criterion_main, Criterion};
use label_tree::AvlTree;
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

fn gen_keys() -> Vec<String> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS)
        .map(|_| format!("{:08x}", rng.next_u32()))
        .collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = gen_keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(key.clone());
            }
        })
    });
}

fn bench_btreeset_get(c: &mut Criterion) {
    let keys = gen_keys();
    let set = keys.iter().cloned().collect::<BTreeSet<String>>();
    c.bench_function("bench btreeset get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_tree_insert(c: &mut Criterion) {
    let keys = gen_keys();
    c.bench_function("bench avl_tree insert", move |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for key in &keys {
                tree.insert(key);
            }
        })
    });
}

fn bench_avl_tree_get(c: &mut Criterion) {
    let keys = gen_keys();
    let tree = keys.iter().collect::<AvlTree>();
    c.bench_function("bench avl_tree get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(tree.search(key));
            }
        })
    });
}

fn bench_avl_tree_remove(c: &mut Criterion) {
    let keys = gen_keys();
    c.bench_function("bench avl_tree remove", move |b| {
        b.iter(|| {
            let mut tree = keys.iter().collect::<AvlTree>();
            for key in &keys {
                tree.remove(key);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_get,
    bench_btreeset_insert,
    bench_avl_tree_get,
    bench_avl_tree_insert,
    bench_avl_tree_remove,
);
criterion_main!(benches);
