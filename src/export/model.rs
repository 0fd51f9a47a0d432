// src/export/model.rs

use crate::models::WorkEntry;
use serde::Serialize;

/// Flat row for CSV / JSON export of the ledger.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub start_date: String,
    pub weekday: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub holiday: bool,
    pub holiday_mark: String,
    pub reason: String,
    pub holiday_excess_minutes: i64,
    pub overtime_minutes: i64,
    pub night_minutes: i64,
}

impl From<&WorkEntry> for EntryExport {
    fn from(e: &WorkEntry) -> Self {
        Self {
            id: e.id,
            start_date: e.start_date.format("%Y-%m-%d").to_string(),
            weekday: e.weekday().to_string(),
            start_time: e.start_time.format("%H:%M").to_string(),
            end_date: e.end_date.format("%Y-%m-%d").to_string(),
            end_time: e.end_time.format("%H:%M").to_string(),
            holiday: e.is_holiday,
            holiday_mark: e.holiday.as_str().to_string(),
            reason: e.reason.clone(),
            holiday_excess_minutes: e.result.holiday_excess,
            overtime_minutes: e.result.overtime,
            night_minutes: e.result.night,
        }
    }
}

pub(crate) fn entries_to_export(entries: &[WorkEntry]) -> Vec<EntryExport> {
    entries.iter().map(EntryExport::from).collect()
}
