// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::summary_to_rows;
use crate::export::notify_export_success;
use crate::models::day_summary::DaySummary;
use crate::utils::path::is_absolute;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the computed summary to `file`.
    ///
    /// - `format`: csv (flat period rows) | json (full summary object)
    /// - `file`: absolute path of the output file
    pub fn export(
        summary: &DaySummary,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => write_csv(path, &summary_to_rows(summary))?,
            ExportFormat::Json => write_json(path, summary)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
