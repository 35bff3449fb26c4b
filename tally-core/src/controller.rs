//! Sort state controller
//!
//! Holds the active `(column, direction)` pair and is the only place it
//! changes. A request for a new column starts ascending; a request for the
//! active column flips direction.

use tally_model::{SortColumn, SortDirection, SortState};
use tracing::debug;

use crate::error::Result;

/// State machine behind the sortable column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    pub fn new(initial: SortState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    /// Transition for `RequestSort(requested)` from `current`.
    pub fn next_state(current: SortState, requested: SortColumn) -> SortState {
        if requested == current.column {
            SortState::new(current.column, current.direction.flipped())
        } else {
            SortState::new(requested, SortDirection::Ascending)
        }
    }

    /// Applies a sort request and returns the new state.
    pub fn request_sort(&mut self, column: SortColumn) -> SortState {
        let previous = self.state;
        self.state = Self::next_state(previous, column);
        debug!(
            from = %previous,
            to = %self.state,
            "sort state changed"
        );
        self.state
    }

    /// Like [`request_sort`](Self::request_sort) for a column named at a
    /// string boundary. Unknown names are rejected and leave the state as is.
    pub fn request_sort_named(&mut self, name: &str) -> Result<SortState> {
        let column: SortColumn = name.parse()?;
        Ok(self.request_sort(column))
    }
}
