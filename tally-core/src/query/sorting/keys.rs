//! Sort key types for comparing records
//!
//! Keys are extracted once per record and sort pass. They carry everything
//! their ordering needs, including the folded forms of text under the
//! natural collation.

use super::traits::SortKey;
use ordered_float::OrderedFloat;
use tally_model::Collation;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Base letters only: canonical decomposition with combining marks dropped,
/// then lowercased. `"Ålesund"` folds to `"alesund"`.
fn fold_base(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Collation levels below the base letters: accents, then case.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
struct Folded {
    base: String,
    accented: String,
}

/// String key for text-based sorting (location)
///
/// Under [`Collation::Natural`] keys compare by base letters, then accents,
/// then case, and finally code points, so only identical strings are
/// `Equal`. Under [`Collation::Ordinal`] only code points count.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct TextKey {
    // Field order is the comparison order.
    folded: Option<Folded>,
    value: String,
}

impl TextKey {
    pub fn new(value: impl Into<String>, collation: Collation) -> Self {
        let value = value.into();
        let folded = match collation {
            Collation::Natural => Some(Folded {
                base: fold_base(&value),
                accented: value.chars().flat_map(char::to_lowercase).collect(),
            }),
            Collation::Ordinal => None,
        };
        TextKey { folded, value }
    }
}

impl SortKey for TextKey {}

/// Numeric key for month, year and total.
///
/// NaN totals order after every number; `-0.0` and `0.0` are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericKey(OrderedFloat<f64>);

impl From<i32> for NumericKey {
    fn from(value: i32) -> Self {
        NumericKey(OrderedFloat(f64::from(value)))
    }
}

impl From<f64> for NumericKey {
    fn from(value: f64) -> Self {
        NumericKey(OrderedFloat(value))
    }
}

impl SortKey for NumericKey {}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural(value: &str) -> TextKey {
        TextKey::new(value, Collation::Natural)
    }

    fn ordinal(value: &str) -> TextKey {
        TextKey::new(value, Collation::Ordinal)
    }

    #[test]
    fn natural_collation_ignores_case_first() {
        assert!(natural("alpha") < natural("Beta"));
        assert!(ordinal("alpha") > ordinal("Beta"));
    }

    #[test]
    fn natural_collation_is_total() {
        // Case-only differences still order deterministically.
        assert!(natural("Oslo") < natural("oslo"));
        assert_eq!(natural("Oslo"), natural("Oslo"));
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        let mut keys = vec![
            natural("Zurich"),
            natural("Ålesund"),
            natural("Bergen"),
            natural("Étretat"),
            natural("Etretat"),
        ];
        keys.sort();

        let expected = vec![
            natural("Ålesund"),
            natural("Bergen"),
            natural("Etretat"),
            natural("Étretat"),
            natural("Zurich"),
        ];
        assert_eq!(keys, expected);
    }

    #[test]
    fn accent_outranks_case() {
        assert!(natural("Ecole") < natural("école"));
        assert!(natural("ecole") < natural("École"));
        // Case alone falls through to code points.
        assert!(natural("Ecole") < natural("ecole"));
    }

    #[test]
    fn ordinal_keeps_code_point_order() {
        assert!(ordinal("Zurich") < ordinal("Ålesund"));
    }

    #[test]
    fn numeric_keys_order_nan_last() {
        let nan = NumericKey::from(f64::NAN);
        let big = NumericKey::from(f64::MAX);
        assert!(big < nan);
        assert_eq!(NumericKey::from(-0.0), NumericKey::from(0.0));
    }
}
