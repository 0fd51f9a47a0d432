// src/export/period.rs

use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use chrono::Datelike;

/// Period filter for listing and export.
///
/// Supports:
/// - `all`
/// - `YYYY`
/// - `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    Year(i32),
    Month(i32, u32),
}

impl Period {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let r = raw.trim();
        let invalid = || AppError::InvalidPeriod(raw.to_string());

        if r.eq_ignore_ascii_case("all") {
            return Ok(Period::All);
        }

        match r.len() {
            // YYYY
            4 => {
                let y: i32 = r.parse().map_err(|_| invalid())?;
                Ok(Period::Year(y))
            }
            // YYYY-MM
            7 if r.as_bytes()[4] == b'-' => {
                let y: i32 = r[0..4].parse().map_err(|_| invalid())?;
                let m: u32 = r[5..7].parse().map_err(|_| invalid())?;
                if !(1..=12).contains(&m) {
                    return Err(invalid());
                }
                Ok(Period::Month(y, m))
            }
            _ => Err(invalid()),
        }
    }

    pub fn contains(&self, e: &WorkEntry) -> bool {
        match *self {
            Period::All => true,
            Period::Year(y) => e.start_date.year() == y,
            Period::Month(y, m) => e.start_date.year() == y && e.start_date.month() == m,
        }
    }

    pub fn select(&self, entries: &[WorkEntry]) -> Vec<WorkEntry> {
        entries.iter().filter(|e| self.contains(e)).cloned().collect()
    }

    pub fn label(&self) -> String {
        match self {
            Period::All => "all".to_string(),
            Period::Year(y) => format!("{y}"),
            Period::Month(y, m) => format!("{y}-{m:02}"),
        }
    }
}
