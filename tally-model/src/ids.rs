use std::fmt;

/// Identity of a normalized record.
///
/// Derived from `(location, month, year)` as `"{location}-{month}-{year}"`,
/// so two observations sharing that triple share an id unless the
/// disambiguated identity scheme is in use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordId(String);

impl RecordId {
    pub fn derive(location: &str, month: i32, year: i32) -> Self {
        RecordId(format!("{location}-{month}-{year}"))
    }

    /// Appends an input-order discriminant, e.g. `Oslo-3-2021~2`.
    pub fn with_occurrence(&self, occurrence: usize) -> Self {
        RecordId(format!("{}~{occurrence}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
