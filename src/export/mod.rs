// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod pdf;
mod pdf_export;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}
