//! CSV document builder.
//!
//! The whole document is assembled in memory and written in one shot: no
//! streaming, no partial files. Field quoting (commas, quotes, newlines)
//! is the csv crate's standard escaping; the writer runs in flexible mode
//! because the document mixes one-, two- and four-field records.

use std::fs;
use std::path::Path;

use crate::core::report::ScheduleReport;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use crate::utils::date;

/// Escapes one record through the csv writer and returns it as a line
/// (including the terminator). Records are rendered one at a time because
/// the document interleaves blank separator lines, which the csv writer
/// would otherwise quote as a lone empty field.
fn record(fields: &[&str]) -> AppResult<String> {
    let mut wtr = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    wtr.write_record(fields)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Builds the full CSV document as a string.
///
/// Layout: a two-line title/date header, one section per collection (title,
/// `NAME,DETAILS,DATE,AMOUNT` header, entry rows, totals row, blank line),
/// then a `SUMMARY` section with the six aggregate figures. Amounts are raw
/// signed decimals with two places and no separators.
pub(crate) fn build_csv(report: &ScheduleReport, title: &str) -> AppResult<String> {
    let mut doc = String::new();

    let as_at = format!("AS AT {}", date::format_long(&report.as_at));
    doc.push_str(&record(&[title])?);
    doc.push_str(&record(&[as_at.as_str()])?);
    doc.push('\n');

    for section in &report.sections {
        doc.push_str(&record(&[section.title])?);
        doc.push_str(&record(&["NAME", "DETAILS", "DATE", "AMOUNT"])?);
        for entry in &section.entries {
            let amount = entry.amount.plain();
            doc.push_str(&record(&[
                entry.name.as_str(),
                entry.details.as_str(),
                entry.date.as_str(),
                amount.as_str(),
            ])?);
        }
        let total = section.total.plain();
        doc.push_str(&record(&[section.total_label, "", "", total.as_str()])?);
        doc.push('\n');
    }

    let totals = &report.totals;
    let summary_rows = [
        ("GRAND TOTAL", totals.grand_total),
        ("EQUITY ACCOUNT BALANCE", report.balances.equity),
        ("DEFICIT/SURPLUS", totals.deficit_or_surplus),
        ("TILL BALANCE", report.balances.till),
        ("PESAPAL BALANCE", report.balances.pesapal),
        ("TOTAL CLOSING ACCOUNT BALANCES", totals.total_closing_balance),
    ];
    doc.push_str(&record(&["SUMMARY"])?);
    for (label, value) in summary_rows {
        let value = value.plain();
        doc.push_str(&record(&[label, value.as_str()])?);
    }

    Ok(doc)
}

pub(crate) fn export_csv(report: &ScheduleReport, title: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let document = build_csv(report, title)?;
    fs::write(path, document)?;

    notify_export_success("CSV", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::money::Money;
    use crate::core::report::build_report;
    use crate::models::{CollectionKind, PaymentEntry};
    use crate::store::ScheduleData;

    fn sample_report() -> ScheduleReport {
        let mut data = ScheduleData::default();
        data.entries_mut(CollectionKind::Approval)
            .push(PaymentEntry::new(
                "WAJI".to_string(),
                "SUPPLY, BOTTLED WATER".to_string(),
                Money::from_cents(1_000_00),
                "2025-11-03".to_string(),
            ));
        build_report(&data, None)
    }

    #[test]
    fn document_shape_matches_the_schedule_layout() {
        let doc = build_csv(&sample_report(), "GMC PAYMENT SCHEDULE").unwrap();
        let lines: Vec<&str> = doc.lines().collect();

        assert_eq!(lines[0], "GMC PAYMENT SCHEDULE");
        assert_eq!(lines[1], "AS AT 11 November 2025");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "UNPRESENTED CHEQUES");
        assert_eq!(lines[4], "NAME,DETAILS,DATE,AMOUNT");
        assert_eq!(lines[5], "OPTIVEN LIMITED,LOAN REPAYMENT,2025-11-01,500000.00");

        assert!(doc.contains("TOTAL UNPRESENTED CHEQUES,,,1297122.00"));
        assert!(doc.contains("CHEQUES/PAYMENTS FOR APPROVAL\n"));
        assert!(doc.contains("TOTAL WEEKLY REQUISITIONS,,,225160.00"));
        assert!(doc.contains("SUMMARY\n"));
        assert!(doc.contains("EQUITY ACCOUNT BALANCE,1495664.00"));
        assert!(doc.ends_with("\n"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let doc = build_csv(&sample_report(), "GMC PAYMENT SCHEDULE").unwrap();
        assert!(doc.contains("WAJI,\"SUPPLY, BOTTLED WATER\",2025-11-03,1000.00"));
    }

    #[test]
    fn summary_uses_raw_signed_decimals() {
        let doc = build_csv(&sample_report(), "GMC PAYMENT SCHEDULE").unwrap();
        // seed grand total 1,937,158 plus the extra 1,000 approval entry
        assert!(doc.contains("GRAND TOTAL,1938158.00"));
        assert!(doc.contains("DEFICIT/SURPLUS,-442494.00"));
        assert!(doc.contains("TOTAL CLOSING ACCOUNT BALANCES,-442494.00"));
    }
}
