//! Benchmarks the end-to-end BSP engine on grid graphs of increasing size, for both
//! label-set/priority-structure representations (criterion, opt-in via `cargo bench`).

use bsp_pareto::graph::grid::generate_grid;
use bsp_pareto::pareto::{run, Config, Representation};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_grid_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsp_engine_grid");

    for side in [10usize, 20, 30] {
        let mut rng = SmallRng::seed_from_u64(side as u64);
        let graph = generate_grid(side, side, 10, &mut rng).expect("grid generation");

        for representation in [Representation::Sequence, Representation::Tree] {
            let config = Config {
                representation,
                ..Config::sequential()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{representation:?}"), side),
                &graph,
                |b, graph| {
                    b.iter(|| run(graph, 0, &config).expect("search"));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_grid_search);
criterion_main!(benches);
