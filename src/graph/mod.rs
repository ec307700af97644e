//! Graph storage for the BSP engine.
//!
//! Unlike the rest of the crate, the graph is not part of the ghost-token ecosystem:
//! it is built once, handed to the engine by shared reference, and never mutated.

pub mod csr;
pub mod formats;
pub mod grid;

pub use csr::{CsrGraph, CsrGraphError, EdgeRecord};
pub use formats::GraphFileError;
pub use grid::generate_grid;
