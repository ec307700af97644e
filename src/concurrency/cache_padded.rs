//! Cache-padded wrapper to prevent false sharing.
//!
//! Re-exports `crossbeam_utils::CachePadded` rather than hand-rolling a fixed-alignment
//! wrapper: crossbeam picks the padding width per target architecture (64 bytes on most
//! x86_64/ARM, 128 on Apple Silicon's M-series and a few others), which a single
//! `#[repr(align(128))]` constant cannot.

pub use crossbeam_utils::CachePadded;
