// src/export/pdf_export.rs

use crate::config::Config;
use crate::core::report::ScheduleReport;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use crate::utils::date;
use std::io;
use std::path::Path;

/// Lays out the schedule document: centered title and AS AT line, one table
/// per collection with its highlighted totals row, then the balances table
/// with the grand-total/closing rows emphasized and the deficit row in red
/// when negative.
pub(crate) fn export_pdf(report: &ScheduleReport, cfg: &Config, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();

    pdf.draw_title(&cfg.document_title);
    pdf.draw_subtitle(&format!(
        "AS AT {}",
        date::format_long(&report.as_at).to_uppercase()
    ));

    let amount_header = format!("Amount ({})", cfg.currency_label);
    let headers = ["Date", "Payee / Supplier", "Details", amount_header.as_str()];

    for section in &report.sections {
        let rows: Vec<Vec<String>> = section
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.display_date(),
                    e.name.clone(),
                    e.details.clone(),
                    e.amount.to_string(),
                ]
            })
            .collect();
        let total_row = vec![
            section.total_label.to_string(),
            String::new(),
            String::new(),
            section.total.to_string(),
        ];

        pdf.section_heading(section.title);
        pdf.write_table(&headers, &rows, &total_row);
    }

    let totals = &report.totals;
    let balance_rows = vec![
        (
            "GRAND TOTAL (Expenses)".to_string(),
            totals.grand_total.to_string(),
        ),
        (
            "EQUITY ACCOUNT BALANCE".to_string(),
            report.balances.equity.to_string(),
        ),
        (
            "DEFICIT / SURPLUS".to_string(),
            totals.deficit_or_surplus.to_string(),
        ),
        ("TILL BALANCE".to_string(), report.balances.till.to_string()),
        (
            "PESAPAL BALANCE".to_string(),
            report.balances.pesapal.to_string(),
        ),
        (
            "TOTAL CLOSING ACCOUNT BALANCES".to_string(),
            totals.total_closing_balance.to_string(),
        ),
    ];
    let alarm = totals.deficit_or_surplus.is_negative().then_some(2);

    pdf.section_heading("Balances");
    pdf.write_balances(&balance_rows, &[0, 5], alarm);

    pdf.save(path, &cfg.contact_line)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
