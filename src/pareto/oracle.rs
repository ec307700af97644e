//! A single-objective Dijkstra-style reference algorithm (§4.8), used only as an oracle
//! in tests: it must produce the same per-node Pareto set as [`crate::pareto::engine`]
//! on the same graph (P3), regardless of which [`Scalarization`] orders its heap (§9).
//!
//! Implemented directly with `std::collections::BinaryHeap` rather than the crate's
//! ghost-branded worklist types — the oracle is single-threaded and test-only, so it
//! never shares a heap across a token boundary and gets nothing from the branded
//! collections' concurrency guarantees.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::CsrGraph;
use crate::pareto::label_set::{LabelSet, SequenceLabelSet};
use crate::pareto::weight::{NodeId, Weight};
use crate::token::GhostToken;

/// How a two-dimensional label is collapsed into a single heap priority. Per §9, this
/// only affects extraction order, never the final Pareto set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalarization {
    /// `w1 + w2`.
    Sum,
    /// `max(w1, w2)`.
    Max,
    /// `(w1, w2)` lexicographic.
    Lex,
}

impl Scalarization {
    fn key(self, w: Weight) -> (i64, i64) {
        match self {
            Scalarization::Sum => (w.w1 + w.w2, 0),
            Scalarization::Max => (w.w1.max(w.w2), 0),
            Scalarization::Lex => (w.w1, w.w2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    priority: (i64, i64),
    node: NodeId,
    label: Weight,
}

/// Runs the oracle from `source` over `graph`, returning one [`SequenceLabelSet`] per
/// node.
///
/// The global heap holds at most one entry per vertex at a time — a vertex with
/// multiple outstanding temporary labels keeps the rest in a per-vertex backlog and is
/// re-seeded with its next-best temporary immediately after its current entry is
/// popped, matching §4.8's description exactly. As in the reference label-setting
/// algorithm, a label is added to `label_sets[target]` only when an edge relaxes into
/// `target`; the source's own zero-cost label is pushed onto the heap directly and
/// never added to `label_sets[source]`, so that vertex's label set stays empty unless
/// some cycle relaxes a label back into it.
pub fn search<'brand>(
    graph: &CsrGraph,
    source: NodeId,
    scalarization: Scalarization,
    token: &mut GhostToken<'brand>,
) -> Vec<SequenceLabelSet> {
    let n = graph.node_count();
    let mut label_sets: Vec<SequenceLabelSet> = (0..n).map(|_| SequenceLabelSet::new()).collect();
    let mut backlog: Vec<BinaryHeap<Reverse<HeapEntry>>> = (0..n).map(|_| BinaryHeap::new()).collect();
    let mut active: Vec<bool> = vec![false; n];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    active[source] = true;
    heap.push(Reverse(HeapEntry {
        priority: scalarization.key(Weight::zero()),
        node: source,
        label: Weight::zero(),
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        for i in graph.edge_begin(entry.node)..graph.edge_end(entry.node) {
            let e = graph.edge(i);
            let edge_weight = Weight::new(i64::from(e.w1), i64::from(e.w2));
            if let Ok(next_label) = entry.label.checked_add(edge_weight) {
                let target = e.target as NodeId;
                if label_sets[target].add(token, next_label) {
                    let candidate = HeapEntry {
                        priority: scalarization.key(next_label),
                        node: target,
                        label: next_label,
                    };
                    offer(&mut heap, &mut backlog, &mut active, candidate);
                }
            }
        }

        // Re-seed the global heap from this vertex's own backlog, if it has one.
        if let Some(Reverse(next_best)) = backlog[entry.node].pop() {
            heap.push(Reverse(next_best));
        } else {
            active[entry.node] = false;
        }
    }

    label_sets
}

/// Offers `entry` to vertex `entry.node`: pushes straight onto the global heap if the
/// vertex has no outstanding entry there yet, otherwise queues it in the vertex's
/// backlog to be re-seeded later.
fn offer(
    heap: &mut BinaryHeap<Reverse<HeapEntry>>,
    backlog: &mut [BinaryHeap<Reverse<HeapEntry>>],
    active: &mut [bool],
    entry: HeapEntry,
) {
    if active[entry.node] {
        backlog[entry.node].push(Reverse(entry));
    } else {
        active[entry.node] = true;
        heap.push(Reverse(entry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CsrGraph, EdgeRecord};

    fn edge(target: u32, w1: u32, w2: u32) -> EdgeRecord {
        EdgeRecord { target, w1, w2 }
    }

    /// S1's diamond: node 0 is the source, node 1 is the target, nodes 2/3 are the two
    /// mutually non-dominated two-hop routes ("2" and "2'" in the spec's wording), and
    /// node 4 is the dominated route's intermediate ("x"): 0->4 (1,1), 4->1 (4,4),
    /// composing to (5,5), which both (2,3) and (3,2) dominate.
    #[test]
    fn matches_diamond_regardless_of_scalarization() {
        let graph = CsrGraph::from_adjacency(vec![
            vec![edge(2, 1, 2), edge(3, 2, 1), edge(4, 1, 1)],
            vec![],
            vec![edge(1, 1, 1)],
            vec![edge(1, 1, 1)],
            vec![edge(1, 4, 4)],
        ])
        .unwrap();

        for scalarization in [Scalarization::Sum, Scalarization::Max, Scalarization::Lex] {
            GhostToken::new(|mut token| {
                let sets = search(&graph, 0, scalarization, &mut token);
                let labels: Vec<Weight> = sets[1].iter(&token).collect();
                assert_eq!(labels, vec![Weight::new(2, 3), Weight::new(3, 2)]);
            });
        }
    }

    #[test]
    fn matches_chain() {
        let graph = CsrGraph::from_adjacency(vec![
            vec![edge(1, 1, 1)],
            vec![edge(2, 1, 1)],
            vec![edge(3, 1, 1)],
            vec![],
        ])
        .unwrap();

        GhostToken::new(|mut token| {
            let sets = search(&graph, 0, Scalarization::Sum, &mut token);
            assert_eq!(sets[3].iter(&token).collect::<Vec<_>>(), vec![Weight::new(3, 3)]);
        });
    }
}
