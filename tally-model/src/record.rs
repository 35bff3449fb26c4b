use crate::ids::RecordId;

/// One observation as supplied by the data-loading side, before it has an
/// identity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRecord {
    pub location: String,
    pub month: i32,
    pub year: i32,
    pub total: f64,
}

impl RawRecord {
    pub fn new(
        location: impl Into<String>,
        month: i32,
        year: i32,
        total: f64,
    ) -> Self {
        Self {
            location: location.into(),
            month,
            year,
            total,
        }
    }

    /// The identity this observation gets under the derived scheme.
    pub fn derived_id(&self) -> RecordId {
        RecordId::derive(&self.location, self.month, self.year)
    }
}

/// A normalized observation. Immutable once built; fields are read through
/// accessors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    id: RecordId,
    location: String,
    month: i32,
    year: i32,
    total: f64,
}

impl Record {
    pub fn from_raw(raw: RawRecord, id: RecordId) -> Self {
        Self {
            id,
            location: raw.location,
            month: raw.month,
            year: raw.year,
            total: raw.total,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_keeps_fields() {
        let raw = RawRecord::new("Bergen", 11, 2019, 42.5);
        let id = raw.derived_id();
        let record = Record::from_raw(raw, id);

        assert_eq!(record.id().as_str(), "Bergen-11-2019");
        assert_eq!(record.location(), "Bergen");
        assert_eq!(record.month(), 11);
        assert_eq!(record.year(), 2019);
        assert_eq!(record.total(), 42.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_record_decodes_from_json() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"location":"Tromsø","month":1,"year":2024,"total":3}"#,
        )
        .expect("valid raw record");
        assert_eq!(raw, RawRecord::new("Tromsø", 1, 2024, 3.0));
    }
}
