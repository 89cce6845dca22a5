// src/export/logic.rs

use crate::db::port::PersistencePort;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{run_export_rows, shift_export_document};
use crate::export::{ExportFormat, ExportKind};
use crate::store::{MaterialRegistry, RunHistoryStore, ShiftStore};
use crate::ui::messages::warning;
use crate::utils::date;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `kind` to `path` in `format`. Returns the number of records written.
    ///
    /// Shifts are a one-way display export and only support JSON.
    pub fn export(
        port: &dyn PersistencePort,
        kind: ExportKind,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                path.display()
            )));
        }

        if kind == ExportKind::Shifts && format != ExportFormat::Json {
            return Err(AppError::Export(format!(
                "shift export supports json only (got {})",
                format.as_str()
            )));
        }

        ensure_writable(path, force)?;

        match kind {
            ExportKind::Shifts => {
                let store = ShiftStore::open(port)?;
                let doc = shift_export_document(store.shifts(), date::now());

                if doc.shifts.is_empty() {
                    warning("No shifts with valid dates to export.");
                    return Ok(0);
                }

                export_json(&doc, path)?;
                Ok(doc.shifts.len())
            }
            ExportKind::History => {
                let history = RunHistoryStore::open(port)?;
                let registry = MaterialRegistry::open(port)?;
                let rows = run_export_rows(history.entries(), registry.list());

                if rows.is_empty() {
                    warning("No run history to export.");
                    return Ok(0);
                }

                match format {
                    ExportFormat::Csv => export_csv(&rows, path)?,
                    ExportFormat::Json => export_json(&rows, path)?,
                }
                Ok(rows.len())
            }
        }
    }
}
