//! Core traits for sortable records
//!
//! Field markers tie a column to its key type at compile time; strategies
//! order whole slices of records.

use std::cmp::Ordering;

use tally_contracts::record_like::RecordLike;
use tally_model::Collation;

/// Keys that can be compared for sorting
pub trait SortKey: Ord + Clone + Send + Sync {}

/// Individual sort field with associated key type
///
/// Each field marker type implements this trait to specify
/// its comparison key type and how to pull it out of a record.
pub trait SortFieldMarker: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Extract an owned key from a record
    fn extract<R: RecordLike + ?Sized>(
        &self,
        record: &R,
        collation: Collation,
    ) -> Self::Key;
}

/// A sorting strategy
pub trait SortStrategy<T>: Send + Sync {
    /// Total comparison of two items under this strategy
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Apply this sorting strategy to the given items.
    ///
    /// Must be stable and agree with [`compare`](Self::compare).
    fn sort(&self, items: &mut [T]);
}
