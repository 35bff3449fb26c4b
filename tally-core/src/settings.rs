use serde::{Deserialize, Serialize};
use tally_model::{Collation, IdentityScheme, SortState};

/// Behaviour knobs for a table instance. Loaded by `tally-config`; every
/// field has a default so partial config files are fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TableSettings {
    /// Ordering shown before the user touches a header.
    pub initial_sort: SortState,
    /// String comparison rule for the location column and its tie-break.
    pub collation: Collation,
    /// How duplicate `(location, month, year)` triples are identified.
    pub identity: IdentityScheme,
}

impl TableSettings {
    pub fn with_initial_sort(mut self, state: SortState) -> Self {
        self.initial_sort = state;
        self
    }

    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    pub fn with_identity(mut self, identity: IdentityScheme) -> Self {
        self.identity = identity;
        self
    }
}
