//! The global priority structure (§4.6): representation B, an ordered tree keyed by
//! `(w1, w2, node)`, backed by the crate's [`BrandedBTreeSet`].
//!
//! Unlike the sequence form, `apply_updates` here is genuinely point-wise: each update
//! is a single tree insert or remove, applied left to right in the pre-sorted batch
//! order, exactly as §4.6 describes for R2.

use crate::collections::BrandedBTreeSet;
use crate::pareto::priority_structure::PriorityStructure;
use crate::pareto::weight::{NodeId, NodeLabel, Update, UpdateKind, Weight};
use crate::token::GhostToken;

type Key = (i64, i64, NodeId);

fn key_of(label: NodeLabel) -> Key {
    label.lex_key()
}

fn label_of(key: Key) -> NodeLabel {
    NodeLabel::new(key.2, Weight::new(key.0, key.1))
}

fn sentinel_min_key() -> Key {
    (Weight::MIN.w1, Weight::MAX.w2, NodeId::MAX)
}

fn sentinel_max_key() -> Key {
    (Weight::MAX.w1, Weight::MIN.w2, 0)
}

/// Representation B: an ordered tree of `(w1, w2, node)` triples.
pub struct TreePriorityStructure<'brand> {
    tree: BrandedBTreeSet<'brand, Key>,
}

impl<'brand> PriorityStructure<'brand> for TreePriorityStructure<'brand> {
    fn new() -> Self {
        let mut tree = BrandedBTreeSet::new();
        tree.insert(sentinel_min_key());
        tree.insert(sentinel_max_key());
        Self { tree }
    }

    fn init(&mut self, token: &mut GhostToken<'brand>, seed: NodeLabel) {
        let _ = token;
        let mut tree = BrandedBTreeSet::new();
        tree.insert(sentinel_min_key());
        tree.insert(sentinel_max_key());
        tree.insert(key_of(seed));
        self.tree = tree;
    }

    fn find_pareto_minima(&self, token: &GhostToken<'brand>) -> Vec<NodeLabel> {
        let min_key = sentinel_min_key();
        let max_key = sentinel_max_key();
        let mut minima = Vec::new();
        let mut min_w2 = i64::MAX;
        let mut prev: Option<Key> = None;

        for &key in self.tree.iter(token).filter(|&&k| k != min_key && k != max_key) {
            let is_minimum = match prev {
                None => true,
                Some(p) => key.1 < min_w2 || (key.0 == p.0 && key.1 == min_w2),
            };
            if is_minimum {
                minima.push(label_of(key));
                min_w2 = min_w2.min(key.1);
            }
            prev = Some(key);
        }
        minima
    }

    fn apply_updates(&mut self, token: &mut GhostToken<'brand>, updates: &[Update]) {
        let _ = token;
        for u in updates {
            let key = key_of(u.payload);
            match u.kind {
                UpdateKind::Insert => {
                    self.tree.insert(key);
                }
                UpdateKind::Delete => {
                    let removed = self.tree.remove(&key);
                    debug_assert!(removed, "DELETE referenced a label not present: {:?}", u.payload);
                }
            }
        }
    }

    fn len(&self, token: &GhostToken<'brand>) -> usize {
        let _ = token;
        self.tree.len() - 2
    }
}
