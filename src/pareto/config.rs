//! Ambient configuration for a BSP search: representation choice, thread count, and
//! the resource limits the work-stealing pool enforces.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which admissible representation backs the label sets and priority structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Representation {
    /// R1: sorted sequences. Cache-friendly scans, O(N) `apply_updates`.
    Sequence,
    /// R2: ordered trees. Amortised updates, worse constants.
    Tree,
}

/// Search-wide configuration, collected once at startup and passed down by value —
/// never read from process globals mid-search (§5's "no process-wide state").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Which representation to build the engine's state from.
    pub representation: Representation,
    /// Worker thread count for the optional parallel steps, `1..=P_max`.
    pub threads: usize,
    /// Capacity of each worker's deque in the work-stealing pool; must be a power of
    /// two and large enough for the widest per-iteration fan-out expected.
    pub deque_capacity: usize,
    /// How long a worker may sit idle before the pool reports a deadlock (§4.3, §5).
    pub idle_budget: Duration,
}

impl Config {
    /// A single-threaded configuration using the sequence representation — the
    /// default for tests and for small graphs where parallelism doesn't pay for the
    /// pool's setup cost.
    pub fn sequential() -> Self {
        Self {
            representation: Representation::Sequence,
            threads: 1,
            deque_capacity: 1024,
            idle_budget: Duration::from_secs(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::sequential()
    }
}
