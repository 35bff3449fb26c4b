//! Field marker types for compile-time safe sorting
//!
//! These zero-sized types represent the columns a record can be sorted by.
//! Each field marker implements the SortFieldMarker trait to specify its key type.

use super::keys::{NumericKey, TextKey};
use super::traits::SortFieldMarker;
use tally_contracts::record_like::RecordLike;
use tally_model::Collation;

/// Sort by location label (collated text)
#[derive(Copy, Clone, Debug, Default)]
pub struct LocationField;

impl SortFieldMarker for LocationField {
    type Key = TextKey;

    fn extract<R: RecordLike + ?Sized>(
        &self,
        record: &R,
        collation: Collation,
    ) -> TextKey {
        TextKey::new(record.location(), collation)
    }
}

/// Sort by month number
#[derive(Copy, Clone, Debug, Default)]
pub struct MonthField;

impl SortFieldMarker for MonthField {
    type Key = NumericKey;

    fn extract<R: RecordLike + ?Sized>(
        &self,
        record: &R,
        _collation: Collation,
    ) -> NumericKey {
        NumericKey::from(record.month())
    }
}

/// Sort by calendar year
#[derive(Copy, Clone, Debug, Default)]
pub struct YearField;

impl SortFieldMarker for YearField {
    type Key = NumericKey;

    fn extract<R: RecordLike + ?Sized>(
        &self,
        record: &R,
        _collation: Collation,
    ) -> NumericKey {
        NumericKey::from(record.year())
    }
}

/// Sort by the measured total
#[derive(Copy, Clone, Debug, Default)]
pub struct TotalField;

impl SortFieldMarker for TotalField {
    type Key = NumericKey;

    fn extract<R: RecordLike + ?Sized>(
        &self,
        record: &R,
        _collation: Collation,
    ) -> NumericKey {
        NumericKey::from(record.total())
    }
}
