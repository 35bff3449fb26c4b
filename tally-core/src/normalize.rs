//! Record normalization: gives every raw observation an identity.

use std::collections::HashMap;

use tally_model::{IdentityScheme, RawRecord, Record, RecordId};
use tracing::{debug, warn};

/// Normalized records plus the ids that more than one input row mapped to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Normalized {
    pub records: Vec<Record>,
    /// Derived ids shared by two or more inputs, in first-seen order.
    pub collisions: Vec<RecordId>,
}

impl Normalized {
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// Assigns ids to raw records according to an [`IdentityScheme`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    scheme: IdentityScheme,
}

impl Normalizer {
    pub fn new(scheme: IdentityScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> IdentityScheme {
        self.scheme
    }

    /// One record per input, in input order.
    pub fn normalize(
        &self,
        raw: impl IntoIterator<Item = RawRecord>,
    ) -> Normalized {
        let raw = raw.into_iter();
        let mut seen: HashMap<RecordId, usize> =
            HashMap::with_capacity(raw.size_hint().0);
        let mut collisions = Vec::new();
        let mut records = Vec::with_capacity(raw.size_hint().0);

        for item in raw {
            let derived = item.derived_id();
            let occurrence = seen.entry(derived.clone()).or_insert(0);
            *occurrence += 1;

            if *occurrence == 2 {
                warn!(id = %derived, "multiple records share a derived id");
                collisions.push(derived.clone());
            }

            let id = match self.scheme {
                IdentityScheme::Disambiguated if *occurrence > 1 => {
                    derived.with_occurrence(*occurrence)
                }
                _ => derived,
            };
            records.push(Record::from_raw(item, id));
        }

        debug!(
            records = records.len(),
            collisions = collisions.len(),
            scheme = %self.scheme,
            "normalized raw records"
        );

        Normalized {
            records,
            collisions,
        }
    }
}

/// Derives `location-month-year` ids for every raw record, keeping order.
pub fn normalize(raw: impl IntoIterator<Item = RawRecord>) -> Vec<Record> {
    Normalizer::default().normalize(raw).records
}
