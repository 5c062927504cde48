//! Stable sorting of filtered entries.
//!
//! Sorting is transient display state: it never mutates the store and is
//! recomputed from the filtered view whenever the key or direction changes.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::Serialize;

use crate::models::PaymentEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Details,
    Date,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// The toggle rule: requesting the key already in effect flips the
    /// direction; requesting a different key resets to ascending.
    pub fn request(current: Option<SortSpec>, key: SortKey) -> SortSpec {
        match current {
            Some(spec) if spec.key == key && spec.direction == SortDirection::Ascending => {
                SortSpec::new(key, SortDirection::Descending)
            }
            _ => SortSpec::ascending(key),
        }
    }
}

fn compare(a: &PaymentEntry, b: &PaymentEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Details => a.details.cmp(&b.details),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Amount => a.amount.cents().cmp(&b.amount.cents()),
    }
}

/// Stable sort: ties keep the relative order of the input sequence, in both
/// directions (descending reverses the comparator, not the slice).
pub fn sort_entries(entries: &mut [PaymentEntry], spec: SortSpec) {
    entries.sort_by(|a, b| {
        let ord = compare(a, b, spec.key);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::money::Money;

    fn entry(name: &str, amount: i64, date: &str) -> PaymentEntry {
        PaymentEntry::new(
            name.to_string(),
            String::new(),
            Money::from_cents(amount),
            date.to_string(),
        )
    }

    #[test]
    fn sorts_by_amount_numerically() {
        let mut entries = vec![
            entry("A", 100_000, "2025-11-01"),
            entry("B", 20_000, "2025-11-02"),
            entry("C", 900_000, "2025-11-03"),
        ];
        sort_entries(&mut entries, SortSpec::ascending(SortKey::Amount));
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn unique_keys_reverse_exactly_between_directions() {
        let mut asc = vec![
            entry("C", 3, "2025-11-03"),
            entry("A", 1, "2025-11-01"),
            entry("B", 2, "2025-11-02"),
        ];
        let mut desc = asc.clone();
        sort_entries(&mut asc, SortSpec::ascending(SortKey::Name));
        sort_entries(&mut desc, SortSpec::new(SortKey::Name, SortDirection::Descending));

        let up: Vec<&str> = asc.iter().map(|e| e.name.as_str()).collect();
        let down: Vec<&str> = desc.iter().map(|e| e.name.as_str()).collect();
        let mut reversed = up.clone();
        reversed.reverse();
        assert_eq!(down, reversed);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let make = || {
            vec![
                entry("SAME", 1, "2025-11-01"),
                entry("SAME", 2, "2025-11-02"),
                entry("SAME", 3, "2025-11-03"),
            ]
        };

        let mut asc = make();
        sort_entries(&mut asc, SortSpec::ascending(SortKey::Name));
        let amounts: Vec<i64> = asc.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(amounts, [1, 2, 3]);

        let mut desc = make();
        sort_entries(&mut desc, SortSpec::new(SortKey::Name, SortDirection::Descending));
        let amounts: Vec<i64> = desc.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(amounts, [1, 2, 3]);
    }

    #[test]
    fn request_toggles_on_same_key_and_resets_on_new_key() {
        let first = SortSpec::request(None, SortKey::Date);
        assert_eq!(first, SortSpec::ascending(SortKey::Date));

        let flipped = SortSpec::request(Some(first), SortKey::Date);
        assert_eq!(flipped.direction, SortDirection::Descending);

        let flipped_back = SortSpec::request(Some(flipped), SortKey::Date);
        assert_eq!(flipped_back.direction, SortDirection::Ascending);

        let reset = SortSpec::request(Some(flipped), SortKey::Amount);
        assert_eq!(reset, SortSpec::ascending(SortKey::Amount));
    }
}
