use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::money::Money;
use crate::utils::date;

/// One row of the payment schedule.
///
/// `date` is kept as a `YYYY-MM-DD` string: the format is fixed-width and
/// zero-padded, so lexicographic comparison is calendar comparison. Inputs
/// are validated against that shape before an entry is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub details: String,
    pub amount: Money,
    pub date: String,
}

impl PaymentEntry {
    /// Creates an entry with a fresh v4 id. Callers validate the fields
    /// first; ids are never reused.
    pub fn new(name: String, details: String, amount: Money, date: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            details,
            amount,
            date,
        }
    }

    /// Date in `DD/MM/YYYY` form for tables and PDF cells.
    pub fn display_date(&self) -> String {
        date::format_display(&self.date)
    }

    /// First 8 hex digits of the id, as shown by `list` and accepted as a
    /// prefix by `edit` and `del`.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Partial update applied by the `edit` command. `None` leaves a field
/// untouched; every provided field has already passed validation.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub details: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.details.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }

    pub fn apply(&self, entry: &mut PaymentEntry) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(details) = &self.details {
            entry.details = details.clone();
        }
        if let Some(amount) = self.amount {
            entry.amount = amount;
        }
        if let Some(d) = &self.date {
            entry.date = d.clone();
        }
    }
}
