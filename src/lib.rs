//! # `bsp-pareto` — bi-objective shortest-path Pareto search
//!
//! Computes the complete Pareto-optimal label set for the single-source bi-objective
//! shortest-path problem on directed graphs with two non-negative integer edge costs
//! per arc: for every reachable vertex, the set of cost vectors `(w1, w2)` such that no
//! other path to that vertex has both coordinates less-or-equal with one strict.
//!
//! The search engine ([`pareto::engine`]) is a label-setting algorithm whose unit of
//! work is a Pareto-minimal *frontier*, extracted in one step from a global
//! [`pareto::priority_structure`] and relaxed in bulk against per-node
//! [`pareto::label_set`]s. Both core structures are built on a small foundation of
//! ghost-token-branded primitives — atomics, a bounded work-stealing deque
//! ([`concurrency::worklist`]), a work-stealing pool ([`concurrency::pool`]), and a
//! branded B-tree ([`collections::btree`]) used as the tree-representation label set
//! and priority structure.
//!
//! ## Example
//!
//! ```rust
//! use bsp_pareto::graph::{CsrGraph, EdgeRecord};
//! use bsp_pareto::pareto::{run, Config};
//!
//! let graph = CsrGraph::from_adjacency(vec![
//!     vec![EdgeRecord { target: 1, w1: 1, w2: 5 }, EdgeRecord { target: 1, w1: 5, w2: 1 }],
//!     vec![],
//! ])
//! .unwrap();
//!
//! let result = run(&graph, 0, &Config::sequential()).unwrap();
//! assert_eq!(result.labels(1).len(), 2); // both arcs are mutually non-dominated
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod collections;
pub mod concurrency;
pub mod graph;
pub mod pareto;
pub mod token;

pub use cell::{GhostCell, GhostLazyCell, GhostLazyLock, GhostOnceCell, GhostUnsafeCell};
pub use collections::BrandedVec;
pub use graph::{CsrGraph, EdgeRecord};
pub use pareto::{run, Config, EngineError, SearchResult, SearchSummary, Weight};
pub use token::GhostToken;

// Note: std::cell::Cell is not re-exported to maintain naming consistency
// Use GhostCell for the halo ecosystem, or import std::cell::Cell directly

// Compile-time assertions for memory layout optimizations
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // Foundational “zero-overhead” layout claims.
    //
    // `GhostUnsafeCell` is `repr(transparent)` over `UnsafeCell<T>` (brand is a ZST),
    // therefore it must match size + alignment exactly.
    assert!(
        mem::size_of::<GhostUnsafeCell<'static, i32>>() == mem::size_of::<core::cell::UnsafeCell<i32>>()
    );
    assert!(
        mem::align_of::<GhostUnsafeCell<'static, i32>>() == mem::align_of::<core::cell::UnsafeCell<i32>>()
    );

    // `GhostCell` must remain a thin wrapper around the raw cell.
    assert!(mem::size_of::<GhostCell<'static, i32>>() == mem::size_of::<GhostUnsafeCell<'static, i32>>());
    assert!(mem::align_of::<GhostCell<'static, i32>>() == mem::align_of::<GhostUnsafeCell<'static, i32>>());

    // Lazy/once primitives should remain small and allocation-free (struct size).
    // These are intentionally loose upper bounds to avoid platform brittleness,
    // while still catching accidental large regressions.
    assert!(mem::size_of::<GhostOnceCell<'static, u64>>() <= mem::size_of::<usize>() * 4);
    assert!(mem::size_of::<GhostLazyCell<'static, u64>>() <= mem::size_of::<usize>() * 6);
    assert!(mem::size_of::<GhostLazyLock<'static, u64>>() <= mem::size_of::<usize>() * 6);
};
