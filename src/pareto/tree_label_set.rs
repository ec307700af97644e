//! The per-node Pareto label set (§4.4): representation B, an ordered tree keyed by
//! `w1`, backed by the crate's [`BrandedBTreeMap`].
//!
//! The insertion algorithm is identical to [`crate::pareto::label_set::SequenceLabelSet`]'s;
//! only storage differs. `BrandedBTreeMap` does not currently expose a predecessor /
//! range-query API (only point `get`/`insert`/`remove` and a full in-order `iter`), so
//! `x_pred`/`eq`/`first_nondominated` are located by scanning `iter()` rather than by
//! descending the tree directly — see `DESIGN.md` for why this is an accepted
//! limitation rather than a contract violation.

use crate::collections::BrandedBTreeMap;
use crate::pareto::label_set::LabelSet;
use crate::pareto::weight::Weight;
use crate::token::GhostToken;

/// Representation B: a `w1 -> w2` tree plus sentinels stored as ordinary entries.
pub struct TreeLabelSet<'brand> {
    tree: BrandedBTreeMap<'brand, i64, i64>,
}

impl<'brand> TreeLabelSet<'brand> {
    fn sentinel_keys() -> (i64, i64) {
        (Weight::MIN.w1, Weight::MAX.w1)
    }
}

impl<'brand> LabelSet<'brand> for TreeLabelSet<'brand> {
    fn new() -> Self {
        let mut tree = BrandedBTreeMap::new();
        let (min_key, max_key) = Self::sentinel_keys();
        tree.insert(min_key, Weight::MAX.w2);
        tree.insert(max_key, Weight::MIN.w2);
        Self { tree }
    }

    fn insert_tracking_removed(
        &mut self,
        token: &mut GhostToken<'brand>,
        new: Weight,
        removed: &mut Vec<Weight>,
    ) -> bool {
        // Snapshot the current ordering once; `BrandedBTreeMap` has no predecessor
        // query, so x_pred/eq/first_nondominated are located by linear scan.
        let snapshot: Vec<(i64, i64)> = self.tree.iter(token).map(|(k, v)| (*k, *v)).collect();

        let x_pred_idx = snapshot
            .iter()
            .rposition(|&(w1, _)| w1 < new.w1)
            .expect("sentinel MIN guarantees a predecessor always exists");

        if snapshot[x_pred_idx].1 <= new.w2 {
            return false;
        }

        let eq_idx = x_pred_idx + 1;
        if snapshot[eq_idx].0 == new.w1 && snapshot[eq_idx].1 <= new.w2 {
            return false;
        }

        let first_nondominated_idx = (eq_idx..snapshot.len())
            .find(|&i| snapshot[i].1 < new.w2)
            .expect("sentinel MAX guarantees a non-dominated bound always exists");

        if eq_idx == first_nondominated_idx {
            self.tree.insert(new.w1, new.w2);
        } else {
            for &(w1, w2) in &snapshot[eq_idx..first_nondominated_idx] {
                removed.push(Weight::new(w1, w2));
                self.tree.remove(&w1);
            }
            self.tree.insert(new.w1, new.w2);
        }
        true
    }

    fn len(&self, token: &GhostToken<'brand>) -> usize {
        let _ = token;
        self.tree.len() - 2
    }

    fn iter<'a>(&'a self, token: &'a GhostToken<'brand>) -> Box<dyn Iterator<Item = Weight> + 'a> {
        let (min_key, max_key) = Self::sentinel_keys();
        Box::new(
            self.tree
                .iter(token)
                .filter(move |(k, _)| **k != min_key && **k != max_key)
                .map(|(k, v)| Weight::new(*k, *v)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::GhostToken;

    #[test]
    fn matches_sequence_representation_on_small_runs() {
        GhostToken::new(|mut token| {
            let mut set = TreeLabelSet::new();
            for w in [(2, 10), (4, 8), (6, 6)] {
                assert!(LabelSet::add(&mut set, &mut token, Weight::new(w.0, w.1)));
            }
            let mut removed = Vec::new();
            assert!(set.insert_tracking_removed(&mut token, Weight::new(3, 1), &mut removed));
            assert_eq!(removed.len(), 2);
            let labels: Vec<Weight> = set.iter(&token).collect();
            assert_eq!(labels, vec![Weight::new(2, 10), Weight::new(3, 1)]);
        });
    }
}
