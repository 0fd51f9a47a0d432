// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::entries_to_export;
use crate::export::ods::render::DATA_ROWS;
use crate::export::ods::{MonthlySheet, OdsTemplate};
use crate::export::{EntryExport, ExportFormat, Period, notify_export_success};
use crate::session::Session;
use crate::ui::messages::{info, warning};
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one `export` run needs besides the session.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Absolute output path; ODS falls back to `output_dir/overtime_YYYYMM.ods`
    pub file: Option<String>,
    pub period: Option<Period>,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    /// Date printed as application date on the form
    pub applied_on: NaiveDate,
    pub force: bool,
}

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Run the export and return the written file, if any.
    pub fn export(session: &Session, req: &ExportRequest) -> AppResult<Option<PathBuf>> {
        match req.format {
            ExportFormat::Ods => Self::export_ods(session, req).map(Some),
            ExportFormat::Csv => Self::export_flat(session, req, export_csv),
            ExportFormat::Json => Self::export_flat(session, req, export_json),
        }
    }

    fn export_ods(session: &Session, req: &ExportRequest) -> AppResult<PathBuf> {
        let (year, month) = match req.period {
            None => (req.applied_on.year(), req.applied_on.month()),
            Some(Period::Month(y, m)) => (y, m),
            Some(other) => {
                return Err(AppError::InvalidPeriod(format!(
                    "{} (the ODS form needs one month, YYYY-MM)",
                    other.label()
                )));
            }
        };

        // validate the template before touching the output
        let template = OdsTemplate::from_path(&req.template)?;

        let sheet = MonthlySheet {
            year,
            month,
            applicant: session.applicant.clone(),
            entries: Period::Month(year, month).select(session.entries.entries()),
        };

        if sheet.entries.is_empty() {
            warning(format!(
                "No entries for {year}-{month:02}: the form will only carry the header."
            ));
        }
        if sheet.entries.len() > DATA_ROWS {
            warning(format!(
                "{} entries for {year}-{month:02}: only the first {} fit on the form.",
                sheet.entries.len(),
                DATA_ROWS
            ));
        }

        let path = match &req.file {
            Some(file) => absolute_output(file)?,
            None => {
                fs::create_dir_all(&req.output_dir)?;
                req.output_dir.join(sheet.file_name())
            }
        };

        ensure_writable(&path, req.force)?;

        info(format!("Exporting to ODS: {}", path.display()));
        let bytes = template.render(&sheet, req.applied_on)?;
        fs::write(&path, bytes)?;

        notify_export_success("ODS", &path);
        Ok(path)
    }

    fn export_flat(
        session: &Session,
        req: &ExportRequest,
        write: fn(&[EntryExport], &Path) -> AppResult<()>,
    ) -> AppResult<Option<PathBuf>> {
        let file = req.file.as_deref().ok_or_else(|| {
            AppError::Export(format!("--file is required for {} export", req.format.as_str()))
        })?;
        let path = absolute_output(file)?;

        ensure_writable(&path, req.force)?;

        let period = req.period.unwrap_or(Period::All);
        let rows = entries_to_export(&period.select(session.entries.entries()));

        if rows.is_empty() {
            warning("No entries found for selected period.");
            return Ok(None);
        }

        write(&rows, &path)?;
        Ok(Some(path))
    }
}

fn absolute_output(file: &str) -> AppResult<PathBuf> {
    let path = Path::new(file);
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }
    Ok(path.to_path_buf())
}
