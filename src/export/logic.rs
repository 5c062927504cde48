// src/export/logic.rs

use crate::config::Config;
use crate::core::report::build_report;
use crate::core::sort::SortSpec;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::pdf_export::export_pdf;
use crate::store::ScheduleData;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Builds the report (filter → optional sort → aggregate) and renders it
    /// in the requested format. CSV and PDF honor the same sort order, so
    /// the two documents can never disagree on row order.
    ///
    /// With no `file` the output lands in the current directory as
    /// `<prefix>_<scheduleDate>.<ext>`.
    pub fn export(
        data: &ScheduleData,
        cfg: &Config,
        format: ExportFormat,
        file: Option<&str>,
        sort_spec: Option<SortSpec>,
        force: bool,
    ) -> AppResult<()> {
        let path: PathBuf = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(format!(
                "{}_{}.{}",
                cfg.file_prefix,
                data.schedule_date,
                format.as_str()
            )),
        };

        ensure_writable(&path, force)?;

        let report = build_report(data, sort_spec);

        match format {
            ExportFormat::Csv => export_csv(&report, &cfg.document_title, &path)?,
            ExportFormat::Json => export_json(&report, &path)?,
            ExportFormat::Pdf => export_pdf(&report, cfg, &path)?,
        }

        Ok(())
    }
}
