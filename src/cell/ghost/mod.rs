//! Safe token-gated cells.
//!
//! Public surface is re-exported from `ghost_cell`.

pub mod ghost_cell;

pub use ghost_cell::GhostCell;
