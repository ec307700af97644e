//! The bi-objective shortest-path (BSP) Pareto-search engine.
//!
//! Two coupled subsystems, specified together because neither makes sense alone:
//!
//! - The per-node [`label_set`] (representations [`label_set::SequenceLabelSet`] and
//!   [`tree_label_set::TreeLabelSet`]), which owns the dominance logic.
//! - The global [`priority_structure`] (representations
//!   [`priority_structure::SequencePriorityStructure`] and
//!   [`tree_priority_structure::TreePriorityStructure`]), which owns the Pareto-minima
//!   extraction and batched-update protocol.
//!
//! [`batch`] folds a sorted run of candidates into one target's label set; [`engine`]
//! wires everything into the bulk-synchronous iteration loop. [`oracle`] is a
//! single-threaded reference implementation used only to check the engine's output in
//! tests.

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod label_set;
pub mod oracle;
pub mod priority_structure;
pub mod tree_label_set;
pub mod tree_priority_structure;
pub mod weight;

pub use config::{Config, Representation};
pub use engine::{run, SearchResult, SearchSummary};
pub use error::EngineError;
pub use label_set::{LabelSet, SequenceLabelSet};
pub use priority_structure::{PriorityStructure, SequencePriorityStructure};
pub use tree_label_set::TreeLabelSet;
pub use tree_priority_structure::TreePriorityStructure;
pub use weight::{Label, NodeId, NodeLabel, Update, UpdateKind, Weight};
