//! Trait surfaces that describe interactions between the table core and the
//! code that loads and paints its rows.
#![allow(missing_docs)]

pub mod events;
pub mod record_like;
pub mod view;

/// Frequently used trait combinators for view and loader crates.
pub mod prelude {
    pub use super::events::TableEvent;
    pub use super::record_like::RecordLike;
    pub use super::view::TableView;
}
