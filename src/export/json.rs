// src/export/json.rs

use crate::core::report::ScheduleReport;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export the full report (sections, balances, totals) pretty-printed.
pub(crate) fn export_json(report: &ScheduleReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
