//! The BSP engine (§4.7): the bulk-synchronous iteration loop that wires the global
//! priority structure, the per-node label sets, and the batched update step (§4.5)
//! together.
//!
//! Each iteration is a barrier-separated pipeline — extract minima, relax edges, sort
//! candidates by target, fold them into label sets, sort the resulting updates, apply
//! them back to the priority structure — repeated until the priority structure is
//! empty. The loop itself never branches on the chosen representation: [`run`] selects
//! [`SequenceLabelSet`]/[`SequencePriorityStructure`] or
//! [`TreeLabelSet`]/[`TreePriorityStructure`] once, at the top, and [`run_generic`] is
//! monomorphized over whichever pair was picked (§9's "avoid dynamic dispatch" note).

use tracing::{debug, info_span};

use crate::graph::CsrGraph;
use crate::pareto::batch::apply_candidate_batch;
use crate::pareto::config::{Config, Representation};
use crate::pareto::error::EngineError;
use crate::pareto::label_set::{LabelSet, SequenceLabelSet};
use crate::pareto::priority_structure::{PriorityStructure, SequencePriorityStructure};
use crate::pareto::tree_label_set::TreeLabelSet;
use crate::pareto::tree_priority_structure::TreePriorityStructure;
use crate::pareto::weight::{NodeId, NodeLabel, Update, Weight};
use crate::token::GhostToken;

/// Stable-sorts `items` by `key`, using rayon's parallel stable sort when the
/// `parallel` feature is enabled and the engine's configured thread count calls for
/// it, falling back to the sequential stable sort otherwise. Per §9's "avoid dynamic
/// dispatch" note and §1's framing that the core's correctness never depends on this
/// running in parallel, both paths produce byte-identical orderings (P5).
fn parallel_stable_sort_by_key<T, K, F>(items: &mut [T], threads: usize, key: F)
where
    T: Send,
    K: Ord + Send,
    F: Fn(&T) -> K + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if threads > 1 {
            use rayon::slice::ParallelSliceMut;
            items.par_sort_by_key(key);
            return;
        }
    }
    let _ = threads;
    items.sort_by_key(key);
}

/// The Pareto-optimal label set for every reachable node, as produced by [`run`].
///
/// Unreachable nodes simply have an empty label slice; the result covers every node id
/// in `0..graph.node_count()`, not only those reached from the source.
#[derive(Debug, Clone)]
pub struct SearchResult {
    labels: Vec<Vec<Weight>>,
}

impl SearchResult {
    /// The Pareto-optimal label set for `node`, ascending by `w1` (hence descending by
    /// `w2`, per I1). Empty if `node` was never reached from the search's source.
    pub fn labels(&self, node: NodeId) -> &[Weight] {
        &self.labels[node]
    }

    /// Number of nodes this result covers — always the searched graph's node count.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// A serializable summary of this result: per-node label counts plus the total,
    /// for the CLI's `-v`/JSON diagnostics output. Not the full label set (which the
    /// caller already has via [`SearchResult::labels`]) — just the ambient statistics
    /// surface SPEC_FULL.md's harness section calls for.
    pub fn summary(&self) -> SearchSummary {
        let per_node_label_counts: Vec<usize> = self.labels.iter().map(Vec::len).collect();
        SearchSummary {
            node_count: self.labels.len(),
            reached_count: per_node_label_counts.iter().filter(|&&n| n > 0).count(),
            total_labels: per_node_label_counts.iter().sum(),
            per_node_label_counts,
        }
    }
}

/// A JSON-serializable summary of one [`SearchResult`], used by the CLI's
/// diagnostics/`-v` output per SPEC_FULL.md's ambient stack section.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchSummary {
    /// Total nodes the search covers.
    pub node_count: usize,
    /// Nodes with at least one Pareto-optimal label.
    pub reached_count: usize,
    /// Sum of every node's label-set size.
    pub total_labels: usize,
    /// Label-set size per node, indexed by node id.
    pub per_node_label_counts: Vec<usize>,
}

/// Runs the BSP engine (§4.7) from `source` over `graph`, per `config`.
///
/// # Errors
/// Returns [`EngineError::Precondition`] if `source` is outside the graph's node range,
/// or if relaxing an edge would overflow a coordinate (I5).
pub fn run(graph: &CsrGraph, source: NodeId, config: &Config) -> Result<SearchResult, EngineError> {
    if source >= graph.node_count() {
        return Err(EngineError::precondition(format!(
            "source node {source} outside graph range 0..{}",
            graph.node_count()
        )));
    }

    match config.representation {
        Representation::Sequence => GhostToken::new(|mut token| {
            let mut label_sets: Vec<SequenceLabelSet> =
                (0..graph.node_count()).map(|_| SequenceLabelSet::new()).collect();
            let mut queue = SequencePriorityStructure::new();
            run_generic(graph, source, &mut token, &mut label_sets, &mut queue, config.threads)?;
            Ok(collect_result(&token, &label_sets))
        }),
        Representation::Tree => GhostToken::new(|mut token| {
            let mut label_sets: Vec<TreeLabelSet> =
                (0..graph.node_count()).map(|_| TreeLabelSet::new()).collect();
            let mut queue = TreePriorityStructure::new();
            run_generic(graph, source, &mut token, &mut label_sets, &mut queue, config.threads)?;
            Ok(collect_result(&token, &label_sets))
        }),
    }
}

/// The representation-agnostic iteration loop. Monomorphized once per `(L, Q)` pair by
/// [`run`]'s two match arms — never dynamically dispatched.
fn run_generic<'brand, L, Q>(
    graph: &CsrGraph,
    source: NodeId,
    token: &mut GhostToken<'brand>,
    label_sets: &mut [L],
    queue: &mut Q,
    threads: usize,
) -> Result<(), EngineError>
where
    L: LabelSet<'brand>,
    Q: PriorityStructure<'brand>,
{
    queue.init(token, NodeLabel::new(source, Weight::zero()));

    let mut minima: Vec<NodeLabel> = Vec::new();
    let mut candidates: Vec<NodeLabel> = Vec::new();
    let mut updates: Vec<Update> = Vec::new();

    let mut iteration: u64 = 0;
    while !queue.is_empty(token) {
        iteration += 1;
        let span = info_span!("bsp_iteration", iteration);
        let _guard = span.enter();

        // Step 1: extract the current Pareto-minimal frontier in one pass.
        minima.clear();
        minima.extend(queue.find_pareto_minima(token));
        debug!(count = minima.len(), "extracted pareto minima");

        // Step 2: relax every outgoing edge of every minimum.
        candidates.clear();
        for m in &minima {
            if m.node >= graph.node_count() {
                return Err(EngineError::precondition(format!(
                    "priority structure produced node id {} outside graph range",
                    m.node
                )));
            }
            for i in graph.edge_begin(m.node)..graph.edge_end(m.node) {
                let e = graph.edge(i);
                let edge_weight = Weight::new(i64::from(e.w1), i64::from(e.w2));
                let candidate_label = m.label.checked_add(edge_weight)?;
                candidates.push(NodeLabel::new(e.target as NodeId, candidate_label));
            }
        }
        debug!(count = candidates.len(), "relaxed candidate labels");

        // Step 3: stable-sort by (target, w1, w2) so each target's run is contiguous
        // and, within a run, ordered exactly as §4.5 requires.
        parallel_stable_sort_by_key(&mut candidates, threads, |c| (c.node, c.label.w1, c.label.w2));

        // Step 4: fold each maximal run into its target's label set.
        updates.clear();
        let mut start = 0;
        while start < candidates.len() {
            let v = candidates[start].node;
            let mut end = start + 1;
            while end < candidates.len() && candidates[end].node == v {
                end += 1;
            }
            let run: Vec<Weight> = candidates[start..end].iter().map(|c| c.label).collect();
            apply_candidate_batch(token, &mut label_sets[v], v, &run, &mut updates);
            start = end;
        }

        // Step 5: every extracted minimum is consumed and scheduled for deletion.
        for m in &minima {
            updates.push(Update::delete(*m));
        }
        debug!(count = updates.len(), "produced update batch");

        // Step 6: stable-sort by (w1, w2, node) for the priority structure's contract.
        parallel_stable_sort_by_key(&mut updates, threads, |u| u.lex_key());

        // Step 7: apply, atomically from the caller's perspective.
        queue.apply_updates(token, &updates);
    }

    debug!(iterations = iteration, "bsp engine converged");
    Ok(())
}

fn collect_result<'brand, L: LabelSet<'brand>>(token: &GhostToken<'brand>, label_sets: &[L]) -> SearchResult {
    let labels = label_sets.iter().map(|ls| ls.iter(token).collect()).collect();
    SearchResult { labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CsrGraph, EdgeRecord};

    fn edge(target: u32, w1: u32, w2: u32) -> EdgeRecord {
        EdgeRecord { target, w1, w2 }
    }

    fn assert_matches_both_representations(graph: &CsrGraph, source: NodeId, expected: &[(NodeId, Vec<Weight>)]) {
        for representation in [Representation::Sequence, Representation::Tree] {
            let config = Config {
                representation,
                ..Config::sequential()
            };
            let result = run(graph, source, &config).unwrap();
            for (node, labels) in expected {
                assert_eq!(result.labels(*node), labels.as_slice(), "representation {representation:?}, node {node}");
            }
        }
    }

    /// S1: a diamond with two mutually non-dominated two-hop routes to the target
    /// (node 1) via nodes 2 and 3 ("2" and "2'" in the spec's wording), plus a
    /// dominated third route via node 4 ("x"): 0->4 (1,1), 4->1 (4,4), composing to
    /// (5,5), dominated by both (2,3) and (3,2).
    #[test]
    fn diamond_keeps_only_non_dominated_paths() {
        let graph = CsrGraph::from_adjacency(vec![
            vec![edge(2, 1, 2), edge(3, 2, 1), edge(4, 1, 1)],
            vec![],
            vec![edge(1, 1, 1)],
            vec![edge(1, 1, 1)],
            vec![edge(1, 4, 4)],
        ])
        .unwrap();

        assert_matches_both_representations(
            &graph,
            0,
            &[(1, vec![Weight::new(2, 3), Weight::new(3, 2)])],
        );
    }

    /// S2: a single zero-cost edge.
    #[test]
    fn zero_cost_edge_produces_single_zero_label() {
        let graph = CsrGraph::from_adjacency(vec![vec![edge(1, 0, 0)], vec![]]).unwrap();
        assert_matches_both_representations(&graph, 0, &[(1, vec![Weight::new(0, 0)])]);
    }

    /// S3: two parallel, mutually non-dominated edges.
    #[test]
    fn parallel_non_dominated_edges_both_survive() {
        let graph = CsrGraph::from_adjacency(vec![vec![edge(1, 1, 5), edge(1, 5, 1)], vec![]]).unwrap();
        assert_matches_both_representations(&graph, 0, &[(1, vec![Weight::new(1, 5), Weight::new(5, 1)])]);
    }

    /// S4: a chain with exactly one label per intermediate node.
    #[test]
    fn chain_propagates_exactly_one_label_per_hop() {
        let graph = CsrGraph::from_adjacency(vec![
            vec![edge(1, 1, 1)],
            vec![edge(2, 1, 1)],
            vec![edge(3, 1, 1)],
            vec![],
        ])
        .unwrap();

        assert_matches_both_representations(
            &graph,
            0,
            &[
                (1, vec![Weight::new(1, 1)]),
                (2, vec![Weight::new(2, 2)]),
                (3, vec![Weight::new(3, 3)]),
            ],
        );
    }

    #[test]
    fn summary_counts_match_labels_and_serializes() {
        let graph = CsrGraph::from_adjacency(vec![vec![edge(1, 1, 5), edge(1, 5, 1)], vec![]]).unwrap();
        let result = run(&graph, 0, &Config::sequential()).unwrap();
        let summary = result.summary();

        assert_eq!(summary.node_count, 2);
        assert_eq!(summary.reached_count, 1); // only node 1; the source's own label set stays empty
        assert_eq!(summary.total_labels, 2); // two labels at node 1
        assert_eq!(summary.per_node_label_counts, vec![0, 2]);

        let json = serde_json::to_string(&summary).unwrap();
        let round_tripped: SearchSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(round_tripped.total_labels, summary.total_labels);
    }

    #[test]
    fn unreachable_nodes_get_empty_label_sets() {
        let graph = CsrGraph::from_adjacency(vec![vec![], vec![]]).unwrap();
        let result = run(&graph, 0, &Config::sequential()).unwrap();
        // The source's own label set stays empty too: it is never seeded directly,
        // only via edge relaxation, and no edge relaxes back into it here.
        assert!(result.labels(0).is_empty());
        assert!(result.labels(1).is_empty());
    }

    #[test]
    fn rejects_source_outside_graph_range() {
        let graph = CsrGraph::from_adjacency(vec![vec![]]).unwrap();
        let err = run(&graph, 5, &Config::sequential()).unwrap_err();
        matches!(err, EngineError::Precondition(_));
    }

    #[test]
    fn single_finite_hop_never_overflows() {
        let graph = CsrGraph::from_adjacency(vec![vec![edge(1, u32::MAX, 0)], vec![]]).unwrap();
        let result = run(&graph, 0, &Config::sequential());
        assert!(result.is_ok());
    }

    /// P5, exercised with the `parallel` feature actually enabled: rayon's parallel
    /// stable sort (steps 3/6) must produce the same per-node label sets as the
    /// sequential fallback, since §1/§9 require the core's correctness to never
    /// depend on whether the optional substrate actually runs in parallel.
    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_sort_path_matches_sequential_on_a_grid() {
        use crate::graph::grid::generate_grid;
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        let mut rng = SmallRng::seed_from_u64(11);
        let graph = generate_grid(5, 5, 10, &mut rng).unwrap();

        let sequential = run(&graph, 0, &Config::sequential()).unwrap();
        let parallel_config = Config { threads: 4, ..Config::sequential() };
        let parallel = run(&graph, 0, &parallel_config).unwrap();

        for node in 0..graph.node_count() {
            assert_eq!(sequential.labels(node), parallel.labels(node));
        }
    }
}
