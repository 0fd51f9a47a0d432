//! Flat dumps of the ledger: one row per entry, minutes as integers.

use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub(crate) fn export_json(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Writing {} entries as JSON: {}", rows.len(), path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Header row comes from the `EntryExport` field names.
pub(crate) fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Writing {} entries as CSV: {}", rows.len(), path.display()));

    let csv_err = |e: csv::Error| AppError::Export(format!("CSV {}: {e}", path.display()));

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    for row in rows {
        wtr.serialize(row).map_err(csv_err)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
