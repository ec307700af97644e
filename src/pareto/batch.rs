//! Batched label-set update (§4.5), the engine's per-target-vertex folding step.

use crate::pareto::label_set::LabelSet;
use crate::pareto::weight::{NodeId, NodeLabel, Update, Weight};
use crate::token::GhostToken;

/// Folds a contiguous run of candidates all targeting `v`, already sorted ascending
/// by `(w1, w2)`, into `label_set`, appending the resulting INSERT/DELETE entries to
/// `updates`.
///
/// The rolling `min` filter discards candidates dominated by an earlier member of the
/// same batch without ever touching the label set, which is what keeps the scan linear
/// in `|candidates| + |deletions|` rather than quadratic.
pub fn apply_candidate_batch<'brand, L: LabelSet<'brand>>(
    token: &mut GhostToken<'brand>,
    label_set: &mut L,
    v: NodeId,
    candidates: &[Weight],
    updates: &mut Vec<Update>,
) {
    let mut min = i64::MAX;
    let mut removed = Vec::new();

    for &c in candidates {
        if c.w2 >= min {
            continue;
        }
        min = c.w2;

        removed.clear();
        if !label_set.insert_tracking_removed(token, c, &mut removed) {
            continue;
        }

        updates.push(Update::insert(NodeLabel::new(v, c)));
        for r in removed.drain(..) {
            updates.push(Update::delete(NodeLabel::new(v, r)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pareto::label_set::SequenceLabelSet;

    #[test]
    fn skips_candidates_dominated_within_the_same_batch() {
        GhostToken::new(|mut token| {
            let mut set = SequenceLabelSet::new();
            let mut updates = Vec::new();
            // (1,10) establishes the staircase; (2,12) is dominated by it within the
            // batch (w2=12 >= running min 10) and must be skipped without even
            // reaching the label set's own dominance check.
            apply_candidate_batch(
                &mut token,
                &mut set,
                0,
                &[Weight::new(1, 10), Weight::new(2, 12), Weight::new(3, 5)],
                &mut updates,
            );
            assert_eq!(updates.len(), 2); // two inserts, (1,10) and (3,5); neither dominates the other
            let inserted: Vec<_> = updates
                .iter()
                .filter(|u| u.kind == crate::pareto::weight::UpdateKind::Insert)
                .map(|u| u.payload.label)
                .collect();
            assert_eq!(inserted, vec![Weight::new(1, 10), Weight::new(3, 5)]);
        });
    }
}
