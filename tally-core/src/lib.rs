//! # Tally Core
//!
//! Core library for Tally tables: turns raw location/month/year/total
//! observations into identified records, orders them deterministically by
//! any column and tracks which column the user asked for.
//!
//! ## Architecture
//!
//! - [`normalize`]: derives record identities
//! - [`query`]: sort keys, strategies and the record sort engine
//! - [`controller`]: the `(column, direction)` state machine
//! - [`table`]: a session wiring the three to a rendering collaborator
//!
//! ## Examples
//!
//! ```
//! use tally_core::{SortableTable, TableSettings};
//! use tally_contracts::{events::TableEvent, view::NullView};
//! use tally_model::{RawRecord, SortColumn};
//!
//! let raw = vec![
//!     RawRecord::new("Oslo", 3, 2021, 7.0),
//!     RawRecord::new("Bergen", 5, 2021, 7.0),
//! ];
//! let mut table = SortableTable::from_raw(raw, TableSettings::default(), NullView);
//! table.handle(TableEvent::RequestSort(SortColumn::Total));
//! assert_eq!(table.rows()[0].location(), "Bergen");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// The `(column, direction)` state machine
pub mod controller;

/// Error types and error handling utilities
pub mod error;

/// Raw record identity derivation
pub mod normalize;

/// Record sorting: keys, strategies and the sort engine
pub mod query;

/// Per-table behaviour settings
pub mod settings;

/// Table session tying normalization, sorting and state to a view
pub mod table;

pub use controller::SortController;
pub use error::{Result, TableError};
pub use normalize::{Normalized, Normalizer, normalize};
pub use query::sorting::{sort, sort_with};
pub use settings::TableSettings;
pub use table::SortableTable;
