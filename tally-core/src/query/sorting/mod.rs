//! Sorting module for table rows
//!
//! This module provides:
//! - Core traits for sort keys, field markers and strategies
//! - Field marker types for compile-time safe key extraction
//! - Sort key types, including collated text keys
//! - The record sort engine with its fixed tie-break chain

pub mod engine;
pub mod fields;
pub mod keys;
pub mod traits;


pub use engine::*;
pub use fields::*;
pub use keys::*;
pub use traits::*;
