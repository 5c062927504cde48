//! Derived totals over the filtered collections.

use serde::Serialize;

use crate::core::money::Money;
use crate::models::PaymentEntry;
use crate::store::Balances;

/// The six aggregate figures of the schedule. All values are exact cents;
/// the sums of zero items are 0.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Totals {
    pub unpresented: Money,
    pub approval: Money,
    pub weekly_requisition: Money,
    pub grand_total: Money,
    pub deficit_or_surplus: Money,
    pub total_closing_balance: Money,
}

pub fn sum_amounts(entries: &[PaymentEntry]) -> Money {
    entries.iter().map(|e| e.amount).sum()
}

/// Derivation chain: grand total is the sum of the three per-collection
/// totals; deficit/surplus is equity minus grand total (negative means the
/// scheduled expenses exceed the equity balance); the closing balance adds
/// till and pesapal on top.
pub fn compute_totals(
    unpresented: &[PaymentEntry],
    approval: &[PaymentEntry],
    weekly_requisition: &[PaymentEntry],
    balances: &Balances,
) -> Totals {
    let total_unpresented = sum_amounts(unpresented);
    let total_approval = sum_amounts(approval);
    let total_weekly = sum_amounts(weekly_requisition);

    let grand_total = total_unpresented + total_approval + total_weekly;
    let deficit_or_surplus = balances.equity - grand_total;
    let total_closing_balance = deficit_or_surplus + balances.till + balances.pesapal;

    Totals {
        unpresented: total_unpresented,
        approval: total_approval,
        weekly_requisition: total_weekly,
        grand_total,
        deficit_or_surplus,
        total_closing_balance,
    }
}
