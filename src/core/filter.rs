//! Schedule-date cutoff filtering.
//!
//! The filter is a read-only view: entries dated after the cutoff are
//! excluded from every downstream computation (totals, sort, export) but
//! stay in the store untouched.

use crate::models::PaymentEntry;
use crate::utils::date;

/// Validates the schedule date as a cutoff. A malformed or empty value
/// yields `None`, which downstream means "no date filtering"; an invalid
/// as-at date must never hide data or fail the view.
pub fn effective_cutoff(schedule_date: &str) -> Option<&str> {
    date::is_valid(schedule_date).then_some(schedule_date)
}

/// Keeps entries whose date is on or before the cutoff, in input order.
/// Both sides are fixed-width `YYYY-MM-DD`, so the string comparison is
/// calendar comparison.
pub fn filter_entries(entries: &[PaymentEntry], cutoff: Option<&str>) -> Vec<PaymentEntry> {
    match cutoff {
        Some(cutoff) => entries
            .iter()
            .filter(|e| e.date.as_str() <= cutoff)
            .cloned()
            .collect(),
        None => entries.to_vec(),
    }
}
