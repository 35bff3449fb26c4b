use tally_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Unknown sort column: {0}")]
    UnknownColumn(String),

    #[error("Model error: {0}")]
    Model(ModelError),
}

impl From<ModelError> for TableError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownColumn(name) => TableError::UnknownColumn(name),
            other => TableError::Model(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
