//! Two-dimensional cost vectors, the basic currency of the BSP engine.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::pareto::error::EngineError;

/// A node identifier: a dense, non-negative integer less than the graph's node count.
pub type NodeId = usize;

/// A bi-objective cost vector `(w1, w2)`.
///
/// Real weights are non-negative; [`Weight::MIN`] and [`Weight::MAX`] are sentinel
/// values used only at the ends of a [`crate::pareto::label_set`] or
/// [`crate::pareto::priority_structure`] and never reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weight {
    /// First objective.
    pub w1: i64,
    /// Second objective.
    pub w2: i64,
}

impl Weight {
    /// The coordinate-wise minimum sentinel, strictly below every real weight.
    pub const MIN: Weight = Weight { w1: i64::MIN, w2: i64::MIN };
    /// The coordinate-wise maximum sentinel, strictly above every real weight.
    pub const MAX: Weight = Weight { w1: i64::MAX, w2: i64::MAX };

    /// Builds a weight from two non-negative coordinates.
    ///
    /// # Panics
    /// Panics in debug builds if either coordinate is negative — per I5 this is a
    /// precondition violation, not recoverable control flow.
    #[inline]
    pub fn new(w1: i64, w2: i64) -> Self {
        debug_assert!(w1 >= 0 && w2 >= 0, "weight coordinates must be non-negative");
        Weight { w1, w2 }
    }

    /// The zero vector `(0, 0)`, the source label.
    #[inline]
    pub const fn zero() -> Self {
        Weight { w1: 0, w2: 0 }
    }

    /// Adds an edge weight to a label, checking for overflow and negative edge costs.
    ///
    /// Per I5, overflow and negative weights are precondition violations and are
    /// reported as [`EngineError::Precondition`] rather than silently wrapping.
    #[inline]
    pub fn checked_add(self, edge: Weight) -> Result<Weight, EngineError> {
        if edge.w1 < 0 || edge.w2 < 0 {
            return Err(EngineError::precondition("edge weight coordinates must be non-negative"));
        }
        let w1 = self
            .w1
            .checked_add(edge.w1)
            .ok_or_else(|| EngineError::precondition("weight addition overflowed on w1"))?;
        let w2 = self
            .w2
            .checked_add(edge.w2)
            .ok_or_else(|| EngineError::precondition("weight addition overflowed on w2"))?;
        Ok(Weight { w1, w2 })
    }

    /// Returns `true` if `self` Pareto-dominates `other`: both coordinates
    /// less-or-equal, with at least one strict. See the GLOSSARY.
    #[inline]
    pub fn dominates(self, other: Weight) -> bool {
        self.w1 <= other.w1 && self.w2 <= other.w2 && self != other
    }

    /// Lexicographic comparison key `(w1, w2)`, used wherever the spec orders by
    /// "w1, then w2".
    #[inline]
    pub fn lex_cmp(self, other: Weight) -> Ordering {
        (self.w1, self.w2).cmp(&(other.w1, other.w2))
    }
}

/// A label is just a cost vector; the alias exists to match the spec's vocabulary at
/// call sites that reason about path costs rather than raw coordinate pairs.
pub type Label = Weight;

/// A label paired with the node it was relaxed to — the unit stored in the global
/// [`crate::pareto::priority_structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeLabel {
    /// The node this label targets.
    pub node: NodeId,
    /// The label's cost vector.
    pub label: Label,
}

impl NodeLabel {
    /// Builds a new node label.
    #[inline]
    pub fn new(node: NodeId, label: Label) -> Self {
        Self { node, label }
    }

    /// The full lexicographic ordering key `(w1, w2, node)` used by the
    /// [`crate::pareto::priority_structure`].
    #[inline]
    pub fn lex_key(self) -> (i64, i64, NodeId) {
        (self.label.w1, self.label.w2, self.node)
    }
}

impl PartialOrd for NodeLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lex_key().cmp(&other.lex_key())
    }
}

/// Whether an [`Update`] adds or removes a [`NodeLabel`] from the priority structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    /// Adds `payload` to the priority structure.
    Insert,
    /// Removes `payload`, which is guaranteed present, from the priority structure.
    Delete,
}

/// One entry of an update batch applied atomically to the priority structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Update {
    /// Whether this entry inserts or deletes.
    pub kind: UpdateKind,
    /// The node label affected.
    pub payload: NodeLabel,
}

impl Update {
    /// Builds an INSERT update.
    #[inline]
    pub fn insert(payload: NodeLabel) -> Self {
        Self { kind: UpdateKind::Insert, payload }
    }

    /// Builds a DELETE update.
    #[inline]
    pub fn delete(payload: NodeLabel) -> Self {
        Self { kind: UpdateKind::Delete, payload }
    }

    /// The ordering key `(w1, w2, node)` updates are sorted by before being applied.
    #[inline]
    pub fn lex_key(self) -> (i64, i64, NodeId) {
        self.payload.lex_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_requires_strict_improvement_somewhere() {
        let a = Weight::new(2, 3);
        let b = Weight::new(2, 3);
        assert!(!a.dominates(b));
        assert!(!b.dominates(a));

        let c = Weight::new(1, 3);
        assert!(c.dominates(a));
        assert!(!a.dominates(c));
    }

    #[test]
    fn checked_add_rejects_overflow() {
        let a = Weight::new(i64::MAX - 1, 0);
        let edge = Weight::new(5, 0);
        assert!(a.checked_add(edge).is_err());
    }

    #[test]
    fn sentinels_bound_every_real_weight() {
        let real = Weight::new(1_000_000, 1_000_000);
        assert!(Weight::MIN.lex_cmp(real) == Ordering::Less);
        assert!(real.lex_cmp(Weight::MAX) == Ordering::Less);
    }
}
