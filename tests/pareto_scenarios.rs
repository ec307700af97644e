//! End-to-end scenarios S1-S6 from the BSP engine's testable-properties section, run
//! against both label-set/priority-structure representations.

use bsp_pareto::graph::grid::{end_node, generate_grid};
use bsp_pareto::graph::{CsrGraph, EdgeRecord};
use bsp_pareto::pareto::oracle::{search as oracle_search, Scalarization};
use bsp_pareto::pareto::{run, Config, Representation, Weight};
use bsp_pareto::GhostToken;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn edge(target: u32, w1: u32, w2: u32) -> EdgeRecord {
    EdgeRecord { target, w1, w2 }
}

fn for_both_representations(f: impl Fn(Representation)) {
    f(Representation::Sequence);
    f(Representation::Tree);
}

/// S1: a diamond with two mutually non-dominated two-hop routes to the target
/// (node 1) via nodes 2 and 3 ("2" and "2'" in the spec's wording: 0->2 (1,2), 2->1
/// (1,1); 0->2' (2,1), 2'->1 (1,1)), plus a dominated third route via node 4 ("x"):
/// 0->4 (1,1), 4->1 (4,4), composing to (5,5), dominated by both (2,3) and (3,2).
#[test]
fn s1_diamond_with_dominated_path() {
    for_both_representations(|representation| {
        let graph = CsrGraph::from_adjacency(vec![
            vec![edge(2, 1, 2), edge(3, 2, 1), edge(4, 1, 1)],
            vec![],
            vec![edge(1, 1, 1)],
            vec![edge(1, 1, 1)],
            vec![edge(1, 4, 4)],
        ])
        .unwrap();
        let config = Config { representation, ..Config::sequential() };
        let result = run(&graph, 0, &config).unwrap();
        assert_eq!(result.labels(1), &[Weight::new(2, 3), Weight::new(3, 2)]);
    });
}

/// S2: a single zero-cost edge.
#[test]
fn s2_single_zero_cost_edge() {
    for_both_representations(|representation| {
        let graph = CsrGraph::from_adjacency(vec![vec![edge(1, 0, 0)], vec![]]).unwrap();
        let config = Config { representation, ..Config::sequential() };
        let result = run(&graph, 0, &config).unwrap();
        assert_eq!(result.labels(1), &[Weight::new(0, 0)]);
    });
}

/// S3: a pair of parallel, mutually non-dominated edges.
#[test]
fn s3_parallel_edges() {
    for_both_representations(|representation| {
        let graph = CsrGraph::from_adjacency(vec![vec![edge(1, 1, 5), edge(1, 5, 1)], vec![]]).unwrap();
        let config = Config { representation, ..Config::sequential() };
        let result = run(&graph, 0, &config).unwrap();
        assert_eq!(result.labels(1), &[Weight::new(1, 5), Weight::new(5, 1)]);
    });
}

/// S4: a chain, exactly one label per intermediate node.
#[test]
fn s4_chain_single_label_per_hop() {
    for_both_representations(|representation| {
        let graph = CsrGraph::from_adjacency(vec![
            vec![edge(1, 1, 1)],
            vec![edge(2, 1, 1)],
            vec![edge(3, 1, 1)],
            vec![],
        ])
        .unwrap();
        let config = Config { representation, ..Config::sequential() };
        let result = run(&graph, 0, &config).unwrap();
        assert_eq!(result.labels(1), &[Weight::new(1, 1)]);
        assert_eq!(result.labels(2), &[Weight::new(2, 2)]);
        assert_eq!(result.labels(3), &[Weight::new(3, 3)]);
    });
}

/// S5: a small grid, cross-checked against the reference oracle.
#[test]
fn s5_small_grid_matches_oracle() {
    let mut rng = SmallRng::seed_from_u64(99);
    let graph = generate_grid(3, 3, 10, &mut rng).unwrap();
    let end = end_node(3, 3);

    for_both_representations(|representation| {
        let config = Config { representation, ..Config::sequential() };
        let engine_result = run(&graph, 0, &config).unwrap();

        GhostToken::new(|mut token| {
            let oracle_sets = oracle_search(&graph, 0, Scalarization::Sum, &mut token);
            let oracle_labels: Vec<Weight> = oracle_sets[end].iter(&token).collect();
            assert_eq!(engine_result.labels(end), oracle_labels.as_slice());
        });
    });
}

/// S6: a larger "road" grid, sanity-checked for a finite, oracle-matching result.
#[test]
#[ignore = "CPU-heavier sanity scenario; run explicitly with `cargo test -- --ignored`"]
fn s6_road_grid_g5_is_finite_and_matches_oracle() {
    let mut rng = SmallRng::seed_from_u64(0xc0ffee);
    let graph = generate_grid(50, 200, 10, &mut rng).unwrap();
    let end = end_node(50, 200);

    let engine_result = run(&graph, 0, &Config::sequential()).unwrap();
    assert!(!engine_result.labels(end).is_empty());

    GhostToken::new(|mut token| {
        let oracle_sets = oracle_search(&graph, 0, Scalarization::Lex, &mut token);
        let oracle_labels: Vec<Weight> = oracle_sets[end].iter(&token).collect();
        assert_eq!(engine_result.labels(end), oracle_labels.as_slice());
    });
}
