//! View-layer snapshot of the types surface.
//! Prefer importing from this module when wiring a table into a renderer.

pub use super::error::ModelError;
pub use super::ids::RecordId;
pub use super::record::{RawRecord, Record};
pub use super::settings::{Collation, IdentityScheme};
pub use super::sorting::{SortColumn, SortDirection, SortState};
