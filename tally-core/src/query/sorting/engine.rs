//! Record sort engine
//!
//! Orders records by one primary column and then by the fixed tie-break
//! chain: location ascending, year descending, month descending. The chain
//! ignores the requested direction, so equal-key rows keep one predictable
//! order whichever way the primary column runs.

use std::cmp::Ordering;

use super::fields::{LocationField, MonthField, TotalField, YearField};
use super::keys::{NumericKey, TextKey};
use super::traits::{SortFieldMarker, SortStrategy};
use tally_contracts::record_like::RecordLike;
use tally_model::{Collation, SortColumn, SortDirection, SortState};

/// Applied in order after the primary column, always in these directions.
pub const TIE_BREAK: [SortState; 3] = [
    SortState::ascending(SortColumn::Location),
    SortState::descending(SortColumn::Year),
    SortState::descending(SortColumn::Month),
];

/// Every key of one record, extracted once per sort pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowKey {
    location: TextKey,
    month: NumericKey,
    year: NumericKey,
    total: NumericKey,
}

impl RowKey {
    pub fn extract<R: RecordLike + ?Sized>(
        record: &R,
        collation: Collation,
    ) -> Self {
        Self {
            location: LocationField.extract(record, collation),
            month: MonthField.extract(record, collation),
            year: YearField.extract(record, collation),
            total: TotalField.extract(record, collation),
        }
    }
}

/// Text columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColumn {
    Location,
}

impl TextColumn {
    fn key(self, row: &RowKey) -> &TextKey {
        match self {
            TextColumn::Location => &row.location,
        }
    }
}

/// Numeric columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericColumn {
    Month,
    Year,
    Total,
}

impl NumericColumn {
    fn key(self, row: &RowKey) -> NumericKey {
        match self {
            NumericColumn::Month => row.month,
            NumericColumn::Year => row.year,
            NumericColumn::Total => row.total,
        }
    }
}

/// A column resolved into the kind of comparison it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text(TextColumn),
    Numeric(NumericColumn),
}

impl ColumnKind {
    pub const fn resolve(column: SortColumn) -> Self {
        match column {
            SortColumn::Location => ColumnKind::Text(TextColumn::Location),
            SortColumn::Month => ColumnKind::Numeric(NumericColumn::Month),
            SortColumn::Year => ColumnKind::Numeric(NumericColumn::Year),
            SortColumn::Total => ColumnKind::Numeric(NumericColumn::Total),
        }
    }

    /// Ascending comparison of two rows on this column.
    pub fn compare(self, a: &RowKey, b: &RowKey) -> Ordering {
        match self {
            ColumnKind::Text(column) => column.key(a).cmp(column.key(b)),
            ColumnKind::Numeric(column) => column.key(a).cmp(&column.key(b)),
        }
    }
}

/// Primary column comparison followed by [`TIE_BREAK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSort {
    primary: ColumnKind,
    direction: SortDirection,
    collation: Collation,
}

impl RecordSort {
    pub fn new(state: SortState, collation: Collation) -> Self {
        Self {
            primary: ColumnKind::resolve(state.column),
            direction: state.direction,
            collation,
        }
    }

    /// Compares two rows whose keys are already extracted.
    pub fn compare_keys(&self, a: &RowKey, b: &RowKey) -> Ordering {
        self.direction
            .apply(self.primary.compare(a, b))
            .then_with(|| {
                TIE_BREAK
                    .iter()
                    .map(|step| {
                        step.direction
                            .apply(ColumnKind::resolve(step.column).compare(a, b))
                    })
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl<T> SortStrategy<T> for RecordSort
where
    T: RecordLike + Clone,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.compare_keys(
            &RowKey::extract(a, self.collation),
            &RowKey::extract(b, self.collation),
        )
    }

    fn sort(&self, items: &mut [T]) {
        // Extract keys once; text folding is too costly to redo per comparison.
        let mut keyed: Vec<(usize, RowKey)> = items
            .iter()
            .map(|item| RowKey::extract(item, self.collation))
            .enumerate()
            .collect();

        // Stable, so fully tied rows keep their input order.
        keyed.sort_by(|a, b| self.compare_keys(&a.1, &b.1));

        let reordered: Vec<T> =
            keyed.iter().map(|(index, _)| items[*index].clone()).collect();
        items.clone_from_slice(&reordered);
    }
}

/// Returns `records` ordered by `state` using natural collation. The input
/// is left untouched.
pub fn sort<T>(records: &[T], state: SortState) -> Vec<T>
where
    T: RecordLike + Clone,
{
    sort_with(records, state, Collation::default())
}

/// Returns `records` ordered by `state` under an explicit collation.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(column = %state.column, direction = %state.direction, rows = records.len())
)]
pub fn sort_with<T>(
    records: &[T],
    state: SortState,
    collation: Collation,
) -> Vec<T>
where
    T: RecordLike + Clone,
{
    let strategy = RecordSort::new(state, collation);
    let mut ordered = records.to_vec();
    strategy.sort(ordered.as_mut_slice());

    debug_assert!(
        ordered.is_sorted_by(|a, b| strategy.compare(a, b).is_le())
    );
    ordered
}
