use std::fmt::{self, Display};

/// Errors produced by model parsing routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownColumn(String),
    UnknownDirection(String),
    UnknownSetting { setting: &'static str, value: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownColumn(name) => {
                write!(f, "unknown sort column: {name}")
            }
            ModelError::UnknownDirection(name) => {
                write!(f, "unknown sort direction: {name}")
            }
            ModelError::UnknownSetting { setting, value } => {
                write!(f, "unknown {setting}: {value}")
            }
        }
    }
}

impl std::error::Error for ModelError {}
