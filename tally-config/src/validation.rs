use thiserror::Error;

use crate::constants::MAX_TOTAL_PRECISION;
use crate::models::TableConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "display.total_precision must be at most {max}, got {value}"
    )]
    PrecisionOutOfRange { value: usize, max: usize },
}

impl TableConfig {
    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.total_precision > MAX_TOTAL_PRECISION {
            return Err(ConfigError::PrecisionOutOfRange {
                value: self.display.total_precision,
                max: MAX_TOTAL_PRECISION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TableConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_excessive_precision() {
        let mut config = TableConfig::default();
        config.display.total_precision = 40;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PrecisionOutOfRange { value: 40, max: 9 })
        );
    }
}
