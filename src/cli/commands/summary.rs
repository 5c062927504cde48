use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::build_report;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::header;
use crate::utils::date;
use std::path::Path;

/// The dashboard view: the six aggregate figures plus the per-collection
/// expense breakdown with percentages.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Summary) {
        let store = Store::open(Path::new(&cfg.data_file));
        let report = build_report(&store.data, None);
        let totals = &report.totals;

        println!(
            "{} AS AT {}\n",
            cfg.document_title,
            date::format_long(&report.as_at)
        );

        header("Expense Breakdown");
        for section in &report.sections {
            let pct = if totals.grand_total.cents() == 0 {
                0.0
            } else {
                section.total.cents() as f64 / totals.grand_total.cents() as f64 * 100.0
            };
            println!(
                "{:<14} {:>5.1}%  {:>15}",
                section.kind.short_label(),
                pct,
                section.total.to_string()
            );
        }
        println!();

        header("Balances");
        let cur = &cfg.currency_label;
        let rows = [
            ("GRAND TOTAL (Expenses)", totals.grand_total),
            ("EQUITY ACCOUNT BALANCE", report.balances.equity),
            ("DEFICIT / SURPLUS", totals.deficit_or_surplus),
            ("TILL BALANCE", report.balances.till),
            ("PESAPAL BALANCE", report.balances.pesapal),
            ("TOTAL CLOSING ACCOUNT BALANCES", totals.total_closing_balance),
        ];
        for (label, value) in rows {
            println!("{label:<32} {cur} {:>15}", value.to_string());
        }
    }

    Ok(())
}
