use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// String comparison rule for text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Collation {
    /// Base letters first, then accents, then case, then code points:
    /// `"Ålesund"` sorts before `"Bergen"`, and `"Oslo"` / `"oslo"` still
    /// have a fixed relative order.
    #[default]
    Natural,
    /// Plain code-point order.
    Ordinal,
}

/// How record identities are derived during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IdentityScheme {
    /// `location-month-year`. Observations sharing that triple collide.
    #[default]
    Derived,
    /// Derived id, with `~n` appended to the n-th repeat of a colliding id.
    Disambiguated,
}

impl Display for Collation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Collation::Natural => f.write_str("natural"),
            Collation::Ordinal => f.write_str("ordinal"),
        }
    }
}

impl FromStr for Collation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" => Ok(Collation::Natural),
            "ordinal" => Ok(Collation::Ordinal),
            _ => Err(ModelError::UnknownSetting {
                setting: "collation",
                value: s.to_string(),
            }),
        }
    }
}

impl Display for IdentityScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IdentityScheme::Derived => f.write_str("derived"),
            IdentityScheme::Disambiguated => f.write_str("disambiguated"),
        }
    }
}

impl FromStr for IdentityScheme {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "derived" => Ok(IdentityScheme::Derived),
            "disambiguated" => Ok(IdentityScheme::Disambiguated),
            _ => Err(ModelError::UnknownSetting {
                setting: "identity scheme",
                value: s.to_string(),
            }),
        }
    }
}
