//! Shared configuration library for Tally.
//!
//! Loads [`TableConfig`] from files, inline JSON or defaults, validates it,
//! and hosts the text renderer used by the `tally-preview` binary.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod preview;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource};
pub use models::{DisplayConfig, TableConfig};
pub use preview::TextTableView;
pub use validation::ConfigError;
