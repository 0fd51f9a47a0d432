use super::{holiday_mark::HolidayMark, minutes::MinuteBuckets, span::WorkSpan};
use crate::utils::formatting::{date_label, weekday_ko};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One logged overtime session with its classified minutes.
///
/// `result` is derived from the span and `is_holiday`; it is never edited in
/// place, the whole entry is rebuilt (see `AddLogic`) when the user edits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    /// Creation timestamp in milliseconds, unique inside a session
    pub id: i64,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub holiday: HolidayMark,
    pub is_holiday: bool,
    pub result: MinuteBuckets,
}

impl WorkEntry {
    pub fn span(&self) -> WorkSpan {
        WorkSpan::new(self.start_date, self.start_time, self.end_date, self.end_time)
    }

    pub fn start_label(&self) -> String {
        date_label(self.start_date)
    }

    pub fn end_label(&self) -> String {
        date_label(self.end_date)
    }

    pub fn weekday(&self) -> &'static str {
        weekday_ko(self.start_date)
    }

    pub fn crosses_midnight(&self) -> bool {
        self.span().crosses_midnight()
    }

    pub fn date_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn get_date_time(&self) -> String {
        self.span().start().format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Fully specified input of an entry, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub span: WorkSpan,
    pub reason: String,
    pub holiday: HolidayMark,
}

impl EntryDraft {
    /// Entry fields from the draft, `result` and `is_holiday` already decided.
    pub fn into_entry(self, id: i64, is_holiday: bool, result: MinuteBuckets) -> WorkEntry {
        WorkEntry {
            id,
            start_date: self.span.start_date,
            start_time: self.span.start_time,
            end_date: self.span.end_date,
            end_time: self.span.end_time,
            reason: self.reason,
            holiday: self.holiday,
            is_holiday,
            result,
        }
    }
}

impl From<&WorkEntry> for EntryDraft {
    fn from(e: &WorkEntry) -> Self {
        Self {
            span: e.span(),
            reason: e.reason.clone(),
            holiday: e.holiday,
        }
    }
}
