//! Report assembly: one pure pass from a store snapshot to everything any
//! surface renders.
//!
//! The CLI tables, the summary, and the CSV/JSON/PDF exports all consume the
//! same [`ScheduleReport`], so the interactive view and the exported
//! documents cannot drift apart. There is no incremental or reactive state;
//! the report is recomputed on demand.

use serde::Serialize;

use crate::core::aggregate::{self, Totals};
use crate::core::filter;
use crate::core::money::Money;
use crate::core::sort::{self, SortSpec};
use crate::models::{CollectionKind, PaymentEntry};
use crate::store::{Balances, ScheduleData};
use crate::ui::messages::warning;

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub kind: CollectionKind,
    pub title: &'static str,
    pub total_label: &'static str,
    pub entries: Vec<PaymentEntry>,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    /// The as-at date, raw `YYYY-MM-DD` as stored.
    pub as_at: String,
    pub sections: Vec<Section>,
    pub balances: Balances,
    pub totals: Totals,
}

impl ScheduleReport {
    pub fn section(&self, kind: CollectionKind) -> &Section {
        // Sections are built from CollectionKind::ALL, so the lookup
        // always succeeds.
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .unwrap_or(&self.sections[0])
    }
}

/// Builds the report with the schedule-date cutoff applied. A malformed or
/// empty cutoff degrades to "no date filtering" with a diagnostic.
pub fn build_report(data: &ScheduleData, sort_spec: Option<SortSpec>) -> ScheduleReport {
    let cutoff = filter::effective_cutoff(&data.schedule_date);
    if cutoff.is_none() {
        warning(format!(
            "Schedule date '{}' is not a valid YYYY-MM-DD date; showing all entries",
            data.schedule_date
        ));
    }
    assemble(data, sort_spec, cutoff)
}

/// Builds the report with the cutoff bypassed (`list --all`).
pub fn build_report_unfiltered(data: &ScheduleData, sort_spec: Option<SortSpec>) -> ScheduleReport {
    assemble(data, sort_spec, None)
}

fn assemble(
    data: &ScheduleData,
    sort_spec: Option<SortSpec>,
    cutoff: Option<&str>,
) -> ScheduleReport {
    let mut sections = Vec::with_capacity(CollectionKind::ALL.len());
    for kind in CollectionKind::ALL {
        let mut entries = filter::filter_entries(data.entries(kind), cutoff);
        let total = aggregate::sum_amounts(&entries);
        if let Some(spec) = sort_spec {
            sort::sort_entries(&mut entries, spec);
        }
        sections.push(Section {
            kind,
            title: kind.title(),
            total_label: kind.total_label(),
            entries,
            total,
        });
    }

    let totals = aggregate::compute_totals(
        &sections[0].entries,
        &sections[1].entries,
        &sections[2].entries,
        &data.balances,
    );

    ScheduleReport {
        as_at: data.schedule_date.clone(),
        sections,
        balances: data.balances,
        totals,
    }
}
