//! Sort request types shared between the engine, the controller and views.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Columns a table can be ordered by. Closed on purpose: there is no way to
/// name a field the records do not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortColumn {
    #[default]
    Location,
    Month,
    Year,
    Total,
}

impl SortColumn {
    /// Every column in header order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Location,
        SortColumn::Month,
        SortColumn::Year,
        SortColumn::Total,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Location => "location",
            SortColumn::Month => "month",
            SortColumn::Year => "year",
            SortColumn::Total => "total",
        }
    }
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "location" => Ok(SortColumn::Location),
            "month" => Ok(SortColumn::Month),
            "year" => Ok(SortColumn::Year),
            "total" => Ok(SortColumn::Total),
            _ => Err(ModelError::UnknownColumn(s.to_string())),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Header glyph used by text renderers.
    pub const fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ModelError::UnknownDirection(s.to_string())),
        }
    }
}

/// The active ordering request: always fully defined, there is no
/// "unsorted" state. Defaults to `(location, ascending)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub const fn ascending(column: SortColumn) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    pub const fn descending(column: SortColumn) -> Self {
        Self::new(column, SortDirection::Descending)
    }
}

impl Display for SortState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_location_ascending() {
        assert_eq!(
            SortState::default(),
            SortState::new(SortColumn::Location, SortDirection::Ascending)
        );
    }

    #[test]
    fn parses_column_names_case_insensitively() {
        assert_eq!("Total".parse::<SortColumn>(), Ok(SortColumn::Total));
        assert_eq!(" year ".parse::<SortColumn>(), Ok(SortColumn::Year));
        assert_eq!(
            "population".parse::<SortColumn>(),
            Err(ModelError::UnknownColumn("population".to_string()))
        );
    }

    #[test]
    fn parses_direction_aliases() {
        assert_eq!("desc".parse(), Ok(SortDirection::Descending));
        assert_eq!("Ascending".parse(), Ok(SortDirection::Ascending));
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn flipping_twice_is_identity() {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(direction.flipped().flipped(), direction);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn state_uses_lowercase_names() {
        let json = serde_json::to_string(&SortState::descending(
            SortColumn::Total,
        ))
        .expect("serializable");
        assert_eq!(json, r#"{"column":"total","direction":"descending"}"#);
    }
}
