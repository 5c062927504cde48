use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};
use std::path::Path;

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Delete an entry by id, with an explicit confirmation step.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        collection,
        id,
        yes,
    } = cmd
    {
        let mut store = Store::open(Path::new(&cfg.data_file));

        // An unknown id is a no-op, not an error.
        let Some(target) = store.resolve_id(*collection, id)? else {
            warning(format!("No entry {} in {}", id, collection.as_str()));
            return Ok(());
        };

        let label = store
            .data
            .entries(*collection)
            .iter()
            .find(|e| e.id == target)
            .map(|e| format!("{} | {} ({})", e.name, e.amount, e.date))
            .unwrap_or_default();

        if !*yes
            && !ask_confirmation(&format!(
                "Delete from {}: {}? This action is irreversible.",
                collection.as_str(),
                label
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        store.delete_entry(*collection, target);
        store.save();

        success(format!("Deleted from {}: {}", collection.as_str(), label));
    }

    Ok(())
}
