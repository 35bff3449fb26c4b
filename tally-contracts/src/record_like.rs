use tally_model::{RawRecord, Record};

/// Read access to the sortable fields of an observation.
///
/// Lets the sort keys be extracted from raw and normalized records alike.
pub trait RecordLike {
    fn location(&self) -> &str;
    fn month(&self) -> i32;
    fn year(&self) -> i32;
    fn total(&self) -> f64;
}

impl RecordLike for Record {
    fn location(&self) -> &str {
        Record::location(self)
    }

    fn month(&self) -> i32 {
        Record::month(self)
    }

    fn year(&self) -> i32 {
        Record::year(self)
    }

    fn total(&self) -> f64 {
        Record::total(self)
    }
}

impl RecordLike for RawRecord {
    fn location(&self) -> &str {
        &self.location
    }

    fn month(&self) -> i32 {
        self.month
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn total(&self) -> f64 {
        self.total
    }
}

impl<T: RecordLike + ?Sized> RecordLike for &T {
    fn location(&self) -> &str {
        (**self).location()
    }

    fn month(&self) -> i32 {
        (**self).month()
    }

    fn year(&self) -> i32 {
        (**self).year()
    }

    fn total(&self) -> f64 {
        (**self).total()
    }
}
