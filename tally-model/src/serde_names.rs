//! Name-based enums deserialize through their `FromStr` impls, so config
//! files accept the same spellings as the command line (`"Total"`,
//! `"desc"`, ` ordinal `).

use crate::settings::{Collation, IdentityScheme};
use crate::sorting::{SortColumn, SortDirection};

macro_rules! deserialize_via_from_str {
    ($($ty:ty),+ $(,)?) => {$(
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    )+};
}

deserialize_via_from_str!(SortColumn, SortDirection, Collation, IdentityScheme);
