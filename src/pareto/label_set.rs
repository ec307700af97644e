//! The per-node Pareto label set (§4.4): representation A, an ordered sequence.
//!
//! `SequenceLabelSet` holds real labels sorted strictly ascending by `w1` (hence
//! strictly descending by `w2`, by I1) between two permanent sentinels. The sentinels
//! let every lookup (`x_pred`, `eq`, `first_nondominated`) assume a match exists,
//! eliminating boundary checks from the insertion algorithm's hot path.

use crate::pareto::weight::Weight;
use crate::token::GhostToken;

/// The per-node Pareto label set contract, shared by both admissible representations
/// (R1 [`SequenceLabelSet`], R2 [`crate::pareto::tree_label_set::TreeLabelSet`]).
///
/// Every method takes a `GhostToken<'brand>` even where a given representation has no
/// use for it (R1 ignores it), so the BSP engine can hold one representation behind a
/// single enum dispatch (see [`crate::pareto::LabelSetRepr`]) without branching on the
/// token's shape.
pub trait LabelSet<'brand> {
    /// Creates an empty label set (sentinels only).
    fn new() -> Self
    where
        Self: Sized;

    /// Attempts to insert `new`, per §4.4's algorithm. Returns `false` (and leaves the
    /// set unchanged) if `new` is dominated. On success, appends every label removed
    /// by the insertion to `removed`, in no particular order.
    fn insert_tracking_removed(
        &mut self,
        token: &mut GhostToken<'brand>,
        new: Weight,
        removed: &mut Vec<Weight>,
    ) -> bool;

    /// Inserts `new`, discarding the deletion list. Convenience for direct tests;
    /// the engine always uses [`LabelSet::insert_tracking_removed`] since it must
    /// emit DELETE updates for removed labels.
    fn add(&mut self, token: &mut GhostToken<'brand>, new: Weight) -> bool {
        let mut removed = Vec::new();
        self.insert_tracking_removed(token, new, &mut removed)
    }

    /// Number of real labels, excluding sentinels.
    fn len(&self, token: &GhostToken<'brand>) -> usize;

    /// `true` if there are no real labels.
    fn is_empty(&self, token: &GhostToken<'brand>) -> bool {
        self.len(token) == 0
    }

    /// Iterates real labels in ascending `w1` order.
    fn iter<'a>(&'a self, token: &'a GhostToken<'brand>) -> Box<dyn Iterator<Item = Weight> + 'a>;
}

/// Representation A: a flat, sorted `Vec<Weight>` with sentinels at both ends.
#[derive(Debug, Clone)]
pub struct SequenceLabelSet {
    /// `labels[0]` is always `Weight::MIN`-keyed, `labels[last]` always
    /// `Weight::MAX`-keyed; real labels occupy the strictly-interior range.
    labels: Vec<Weight>,
}

impl SequenceLabelSet {
    fn sentinel_min() -> Weight {
        Weight { w1: Weight::MIN.w1, w2: Weight::MAX.w2 }
    }

    fn sentinel_max() -> Weight {
        Weight { w1: Weight::MAX.w1, w2: Weight::MIN.w2 }
    }

    /// Real labels, in ascending `w1` order, excluding sentinels.
    pub fn labels(&self) -> &[Weight] {
        &self.labels[1..self.labels.len() - 1]
    }
}

impl<'brand> LabelSet<'brand> for SequenceLabelSet {
    fn new() -> Self {
        Self { labels: vec![Self::sentinel_min(), Self::sentinel_max()] }
    }

    fn insert_tracking_removed(
        &mut self,
        token: &mut GhostToken<'brand>,
        new: Weight,
        removed: &mut Vec<Weight>,
    ) -> bool {
        let _ = token;

        // Step 1: x_pred = last label with w1 strictly less than new.w1.
        let x_pred_idx = self
            .labels
            .iter()
            .rposition(|l| l.w1 < new.w1)
            .expect("sentinel MIN guarantees a predecessor always exists");

        // Step 2: reject if x_pred dominates (or ties) new on w2.
        if self.labels[x_pred_idx].w2 <= new.w2 {
            return false;
        }

        // Step 3: eq = first label with w1 >= new.w1.
        let eq_idx = x_pred_idx + 1;
        if self.labels[eq_idx].w1 == new.w1 && self.labels[eq_idx].w2 <= new.w2 {
            return false;
        }

        // Step 4: first_nondominated = first label at/after eq with w2 < new.w2.
        let first_nondominated_idx = (eq_idx..self.labels.len())
            .find(|&i| self.labels[i].w2 < new.w2)
            .expect("sentinel MAX guarantees a non-dominated bound always exists");

        if eq_idx == first_nondominated_idx {
            // Step 5: plain insert before first_nondominated, no overwrite.
            self.labels.insert(first_nondominated_idx, new);
        } else {
            // Step 6: overwrite eq, erase (eq, first_nondominated).
            removed.push(self.labels[eq_idx]);
            removed.extend(self.labels[eq_idx + 1..first_nondominated_idx].iter().copied());
            self.labels.splice(eq_idx..first_nondominated_idx, std::iter::once(new));
        }
        true
    }

    fn len(&self, token: &GhostToken<'brand>) -> usize {
        let _ = token;
        self.labels.len() - 2
    }

    fn iter<'a>(&'a self, token: &'a GhostToken<'brand>) -> Box<dyn Iterator<Item = Weight> + 'a> {
        let _ = token;
        Box::new(self.labels().iter().copied())
    }
}

impl Default for SequenceLabelSet {
    fn default() -> Self {
        <SequenceLabelSet as LabelSet<'static>>::new()
    }
}
