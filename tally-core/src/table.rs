//! A sortable table session.
//!
//! Ties the normalizer, the sort engine and the controller together and
//! pushes every new ordering to a [`TableView`].

use tally_contracts::events::TableEvent;
use tally_contracts::view::TableView;
use tally_model::{RawRecord, Record, RecordId, SortColumn, SortState};
use tracing::{debug, trace};

use crate::controller::SortController;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::query::sorting::sort_with;
use crate::settings::TableSettings;

/// One table instance. Each instance owns its own sort state, so several
/// tables can coexist.
#[derive(Debug)]
pub struct SortableTable<V: TableView> {
    /// Snapshot in input order; every sort starts from here.
    records: Vec<Record>,
    /// `records` ordered by the current state.
    rows: Vec<Record>,
    controller: SortController,
    settings: TableSettings,
    selection: Vec<RecordId>,
    view: V,
}

impl<V: TableView> SortableTable<V> {
    /// Builds the table and presents the initial ordering.
    pub fn new(records: Vec<Record>, settings: TableSettings, view: V) -> Self {
        let mut table = Self {
            records,
            rows: Vec::new(),
            controller: SortController::new(settings.initial_sort),
            settings,
            selection: Vec::new(),
            view,
        };
        table.refresh();
        table
    }

    /// Normalizes `raw` with the configured identity scheme first.
    pub fn from_raw(
        raw: impl IntoIterator<Item = RawRecord>,
        settings: TableSettings,
        view: V,
    ) -> Self {
        let normalized = Normalizer::new(settings.identity).normalize(raw);
        Self::new(normalized.records, settings, view)
    }

    /// Ordered rows as last presented.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn state(&self) -> SortState {
        self.controller.state()
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Last selection reported by the view.
    pub fn selection(&self) -> &[RecordId] {
        &self.selection
    }

    /// Rows whose id is in the last reported selection, in display order.
    pub fn selected_records(&self) -> Vec<&Record> {
        self.rows
            .iter()
            .filter(|row| self.selection.contains(row.id()))
            .collect()
    }

    pub fn handle(&mut self, event: TableEvent) {
        match event {
            TableEvent::RequestSort(column) => {
                self.request_sort(column);
            }
            TableEvent::SelectionChanged(ids) => {
                trace!(selected = ids.len(), "selection reported");
                self.selection = ids;
            }
        }
    }

    /// Moves the controller and re-sorts.
    pub fn request_sort(&mut self, column: SortColumn) -> SortState {
        let state = self.controller.request_sort(column);
        self.refresh();
        state
    }

    /// String-boundary variant of [`request_sort`](Self::request_sort).
    /// Unknown column names fail without touching state or rows.
    pub fn request_sort_named(&mut self, name: &str) -> Result<SortState> {
        let state = self.controller.request_sort_named(name)?;
        self.refresh();
        Ok(state)
    }

    /// Swaps in a new snapshot and re-sorts it under the current state.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.refresh();
    }

    fn refresh(&mut self) {
        let state = self.controller.state();
        self.rows = sort_with(&self.records, state, self.settings.collation);
        debug!(
            column = %state.column,
            direction = %state.direction,
            rows = self.rows.len(),
            "table re-sorted"
        );
        self.view.present(&self.rows, state);
    }
}
