//! Core data model definitions shared across Tally crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod prelude;
pub mod record;
#[cfg(feature = "serde")]
mod serde_names;
pub mod settings;
pub mod sorting;

// Intentionally curated re-exports for downstream consumers.
pub use error::ModelError;
pub use ids::RecordId;
pub use record::{RawRecord, Record};
pub use settings::{Collation, IdentityScheme};
pub use sorting::{SortColumn, SortDirection, SortState};
