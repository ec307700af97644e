//! Benchmarks raw label-set insertion throughput for both representations, isolated
//! from the engine's graph traversal and priority-structure overhead.

use bsp_pareto::pareto::{LabelSet, SequenceLabelSet, TreeLabelSet, Weight};
use bsp_pareto::GhostToken;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn staircase_insertions(n: usize, seed: u64) -> Vec<Weight> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Weight::new(rng.gen_range(0..10_000), rng.gen_range(0..10_000)))
        .collect()
}

fn bench_sequence_insert(c: &mut Criterion) {
    let candidates = staircase_insertions(5_000, 1);
    c.bench_function("sequence_label_set_insert_5000", |b| {
        b.iter(|| {
            GhostToken::new(|mut token| {
                let mut set = SequenceLabelSet::new();
                for &w in &candidates {
                    LabelSet::add(&mut set, &mut token, w);
                }
            });
        });
    });
}

fn bench_tree_insert(c: &mut Criterion) {
    let candidates = staircase_insertions(5_000, 1);
    c.bench_function("tree_label_set_insert_5000", |b| {
        b.iter(|| {
            GhostToken::new(|mut token| {
                let mut set = TreeLabelSet::new();
                for &w in &candidates {
                    LabelSet::add(&mut set, &mut token, w);
                }
            });
        });
    });
}

criterion_group!(benches, bench_sequence_insert, bench_tree_insert);
criterion_main!(benches);
