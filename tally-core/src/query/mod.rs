pub mod sorting;

pub use sorting::*;
