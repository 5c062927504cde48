use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::money::Money;
use crate::core::report::build_report;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;
use std::path::Path;

/// Show or set the three account balances.
///
/// Balances, unlike entry amounts, may legitimately be zero or negative, so
/// only the numeric shape is validated (still rounded to 2 decimals).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance {
        equity,
        till,
        pesapal,
    } = cmd
    {
        let mut store = Store::open(Path::new(&cfg.data_file));

        let mut changes: Vec<String> = Vec::new();

        if let Some(raw) = equity {
            let v: Money = raw.parse()?;
            store.data.balances.equity = v;
            changes.push(format!("equity={v}"));
        }
        if let Some(raw) = till {
            let v: Money = raw.parse()?;
            store.data.balances.till = v;
            changes.push(format!("till={v}"));
        }
        if let Some(raw) = pesapal {
            let v: Money = raw.parse()?;
            store.data.balances.pesapal = v;
            changes.push(format!("pesapal={v}"));
        }

        if !changes.is_empty() {
            store.save();
            success(format!("Balances updated: {}", changes.join(", ")));
        }

        let report = build_report(&store.data, None);
        let cur = &cfg.currency_label;
        println!(
            "EQUITY ACCOUNT BALANCE          {cur} {:>15}",
            report.balances.equity.to_string()
        );
        println!(
            "TILL BALANCE                    {cur} {:>15}",
            report.balances.till.to_string()
        );
        println!(
            "PESAPAL BALANCE                 {cur} {:>15}",
            report.balances.pesapal.to_string()
        );
        println!(
            "TOTAL CLOSING ACCOUNT BALANCES  {cur} {:>15}",
            report.totals.total_closing_balance.to_string()
        );
    }

    Ok(())
}
