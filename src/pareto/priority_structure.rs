//! The global priority structure (§4.6): representation A, a sorted sequence.
//!
//! Holds every tentative [`NodeLabel`] in the graph, ordered lexicographically by
//! `(w1, w2, node)`, padded with `(MIN, MAX, ·)` and `(MAX, MIN, ·)` sentinels so
//! `find_pareto_minima` never has to special-case the first/last element.

use crate::pareto::weight::{NodeId, NodeLabel, Update, UpdateKind, Weight};
use crate::token::GhostToken;

/// The global priority structure contract, shared by both admissible representations
/// (R1 [`SequencePriorityStructure`], R2
/// [`crate::pareto::tree_priority_structure::TreePriorityStructure`]).
pub trait PriorityStructure<'brand> {
    /// Creates an empty priority structure (sentinels only).
    fn new() -> Self
    where
        Self: Sized;

    /// Empties the structure and inserts the single seed label — the engine's start
    /// condition `Q.init((source, (0,0)))`.
    fn init(&mut self, token: &mut GhostToken<'brand>, seed: NodeLabel);

    /// Returns every Pareto-minimal element among all currently stored elements, in
    /// ascending `(w1, w2)` order. Ties (equal `(w1, w2)` on adjacent elements sharing
    /// `w1`) are all reported — see §9's Open Question resolution.
    fn find_pareto_minima(&self, token: &GhostToken<'brand>) -> Vec<NodeLabel>;

    /// Applies a batch of INSERT/DELETE updates, pre-sorted ascending by
    /// `(w1, w2, node)`. DELETEs reference elements guaranteed to be present.
    fn apply_updates(&mut self, token: &mut GhostToken<'brand>, updates: &[Update]);

    /// Number of real elements, excluding sentinels.
    fn len(&self, token: &GhostToken<'brand>) -> usize;

    /// `true` if there are no real elements.
    fn is_empty(&self, token: &GhostToken<'brand>) -> bool {
        self.len(token) == 0
    }
}

fn sentinel_min(node: NodeId) -> NodeLabel {
    NodeLabel::new(node, Weight { w1: Weight::MIN.w1, w2: Weight::MAX.w2 })
}

fn sentinel_max(node: NodeId) -> NodeLabel {
    NodeLabel::new(node, Weight { w1: Weight::MAX.w1, w2: Weight::MIN.w2 })
}

/// Representation A: a flat, sorted `Vec<NodeLabel>` with sentinels at both ends.
///
/// Sentinel node ids are irrelevant to ordering (their weight coordinates already
/// place them outside the real range) and are fixed at `NodeId::MAX` / `0` so they
/// never collide with a real node id's lexicographic key.
#[derive(Debug, Clone)]
pub struct SequencePriorityStructure {
    labels: Vec<NodeLabel>,
}

impl SequencePriorityStructure {
    fn fresh() -> Vec<NodeLabel> {
        vec![sentinel_min(NodeId::MAX), sentinel_max(0)]
    }

    /// Real elements, in ascending `(w1, w2, node)` order, excluding sentinels.
    pub fn elements(&self) -> &[NodeLabel] {
        &self.labels[1..self.labels.len() - 1]
    }
}

impl<'brand> PriorityStructure<'brand> for SequencePriorityStructure {
    fn new() -> Self {
        Self { labels: Self::fresh() }
    }

    fn init(&mut self, token: &mut GhostToken<'brand>, seed: NodeLabel) {
        let _ = token;
        self.labels = Self::fresh();
        self.labels.insert(1, seed);
    }

    fn find_pareto_minima(&self, token: &GhostToken<'brand>) -> Vec<NodeLabel> {
        let _ = token;
        let mut minima = Vec::new();
        let mut min_w2 = i64::MAX;
        let mut prev: Option<NodeLabel> = None;

        for &x in self.elements() {
            let is_minimum = match prev {
                None => true,
                Some(p) => x.label.w2 < min_w2 || (x.label.w1 == p.label.w1 && x.label.w2 == min_w2),
            };
            if is_minimum {
                minima.push(x);
                min_w2 = min_w2.min(x.label.w2);
            }
            prev = Some(x);
        }
        minima
    }

    fn apply_updates(&mut self, token: &mut GhostToken<'brand>, updates: &[Update]) {
        let _ = token;
        let real = self.elements().to_vec();
        let mut merged = Vec::with_capacity(real.len() + updates.len());
        let (mut li, mut ui) = (0usize, 0usize);

        loop {
            match (real.get(li), updates.get(ui)) {
                (None, None) => break,
                (Some(l), None) => {
                    merged.push(*l);
                    li += 1;
                }
                (None, Some(u)) => {
                    match u.kind {
                        UpdateKind::Insert => merged.push(u.payload),
                        UpdateKind::Delete => {
                            debug_assert!(false, "DELETE referenced a label not present: {:?}", u.payload)
                        }
                    }
                    ui += 1;
                }
                (Some(l), Some(u)) => {
                    let lk = l.lex_key();
                    let uk = u.lex_key();
                    if lk < uk {
                        merged.push(*l);
                        li += 1;
                    } else if lk == uk {
                        debug_assert_eq!(u.kind, UpdateKind::Delete, "INSERT collided with an existing key");
                        li += 1;
                        ui += 1;
                    } else {
                        match u.kind {
                            UpdateKind::Insert => merged.push(u.payload),
                            UpdateKind::Delete => {
                                debug_assert!(false, "DELETE referenced a label not present: {:?}", u.payload)
                            }
                        }
                        ui += 1;
                    }
                }
            }
        }

        let mut labels = Vec::with_capacity(merged.len() + 2);
        labels.push(sentinel_min(NodeId::MAX));
        labels.extend(merged);
        labels.push(sentinel_max(0));
        self.labels = labels;
    }

    fn len(&self, token: &GhostToken<'brand>) -> usize {
        let _ = token;
        self.labels.len() - 2
    }
}

impl Default for SequencePriorityStructure {
    fn default() -> Self {
        <SequencePriorityStructure as PriorityStructure<'static>>::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::GhostToken;

    fn nl(node: NodeId, w1: i64, w2: i64) -> NodeLabel {
        NodeLabel::new(node, Weight::new(w1, w2))
    }

    #[test]
    fn first_real_element_is_always_a_minimum() {
        GhostToken::new(|mut token| {
            let mut q = SequencePriorityStructure::new();
            q.init(&mut token, nl(0, 0, 0));
            let minima = q.find_pareto_minima(&token);
            assert_eq!(minima, vec![nl(0, 0, 0)]);
        });
    }

    #[test]
    fn staircase_minima_are_strictly_decreasing_in_w2() {
        GhostToken::new(|mut token| {
            let mut q = SequencePriorityStructure::new();
            q.init(&mut token, nl(0, 1, 10));
            q.apply_updates(
                &mut token,
                &[Update::insert(nl(1, 2, 8)), Update::insert(nl(2, 5, 3)), Update::insert(nl(3, 5, 9))],
            );
            let minima = q.find_pareto_minima(&token);
            assert_eq!(minima, vec![nl(0, 1, 10), nl(1, 2, 8), nl(2, 5, 3)]);
        });
    }

    #[test]
    fn ties_at_equal_cost_are_all_reported() {
        GhostToken::new(|mut token| {
            let mut q = SequencePriorityStructure::new();
            q.init(&mut token, nl(0, 1, 5));
            q.apply_updates(&mut token, &[Update::insert(nl(1, 1, 5))]);
            let minima = q.find_pareto_minima(&token);
            assert_eq!(minima, vec![nl(0, 1, 5), nl(1, 1, 5)]);
        });
    }

    #[test]
    fn apply_updates_preserves_sort_order_after_mixed_batch() {
        GhostToken::new(|mut token| {
            let mut q = SequencePriorityStructure::new();
            q.init(&mut token, nl(0, 0, 0));
            q.apply_updates(&mut token, &[Update::insert(nl(1, 1, 1)), Update::insert(nl(2, 2, 2))]);
            q.apply_updates(&mut token, &[Update::delete(nl(0, 0, 0)), Update::insert(nl(3, 0, 5))]);
            let elements: Vec<NodeLabel> = q.elements().to_vec();
            assert_eq!(elements, vec![nl(3, 0, 5), nl(1, 1, 1), nl(2, 2, 2)]);
        });
    }
}
