use crate::cli::commands::validate;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EntryPatch;
use crate::store::Store;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Edit an existing entry; only the provided fields change.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        collection,
        id,
        name,
        details,
        amount,
        date,
    } = cmd
    {
        let patch = EntryPatch {
            name: name.as_deref().map(validate::parse_name).transpose()?,
            details: details.as_ref().map(|d| d.trim().to_string()),
            amount: amount.as_deref().map(validate::parse_amount).transpose()?,
            date: date.as_deref().map(validate::parse_entry_date).transpose()?,
        };

        if patch.is_empty() {
            warning("No fields provided to edit (use --name/--details/--amount/--date)");
            return Ok(());
        }

        let mut store = Store::open(Path::new(&cfg.data_file));

        let Some(target) = store.resolve_id(*collection, id)? else {
            warning(format!("No entry {} in {}", id, collection.as_str()));
            return Ok(());
        };

        store.edit_entry(*collection, target, &patch);
        store.save();

        success(format!(
            "Entry {} updated in {}",
            &target.simple().to_string()[..8],
            collection.as_str()
        ));
    }

    Ok(())
}
