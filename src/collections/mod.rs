//! Collections optimized for Ghost-style usage.

pub mod branded_vec;
pub mod btree;
pub mod chunked_vec;

pub use branded_vec::BrandedVec;
pub use btree::{BrandedBTreeMap, BrandedBTreeSet};
pub use chunked_vec::ChunkedVec;

/// Common size-query surface shared by the branded collection types.
pub trait BrandedCollection<'brand> {
    /// Returns `true` if the collection contains no elements.
    fn is_empty(&self) -> bool;
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;
}






