use crate::cli::commands::validate;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::PaymentEntry;
use crate::store::Store;
use crate::ui::messages::success;
use std::path::Path;

/// Add a payment entry to a collection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        collection,
        name,
        details,
        amount,
        date,
    } = cmd
    {
        // Every field is validated before the store is opened; a rejected
        // form leaves the data file untouched.
        let name = validate::parse_name(name)?;
        let amount = validate::parse_amount(amount)?;
        let date = validate::parse_entry_date(date)?;
        let details = details.as_deref().unwrap_or("").trim().to_string();

        let mut store = Store::open(Path::new(&cfg.data_file));

        let entry = PaymentEntry::new(name, details, amount, date);
        let short = entry.short_id();
        let label = format!("{} | {} ({})", entry.name, entry.amount, entry.date);

        store.add_entry(*collection, entry);
        store.save();

        success(format!(
            "Added to {}: {} [id {}]",
            collection.as_str(),
            label,
            short
        ));
    }

    Ok(())
}
