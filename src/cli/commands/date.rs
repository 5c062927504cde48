use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date;
use std::path::Path;

/// Set the schedule (as-at cutoff) date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Date { date: raw } = cmd {
        if date::parse_date(raw).is_none() {
            return Err(AppError::InvalidDate(format!(
                "{raw} (expected YYYY-MM-DD)"
            )));
        }

        let mut store = Store::open(Path::new(&cfg.data_file));
        store.data.schedule_date = raw.clone();
        store.save();

        success(format!("Schedule date set to {}", date::format_long(raw)));
    }

    Ok(())
}
