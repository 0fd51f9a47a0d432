use crate::core::holiday::HolidayCalendar;
use crate::core::ledger::LedgerAction;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryDraft, HolidayMark, WorkEntry, WorkSpan};
use crate::session::Session;
use crate::session::log::ttlog;
use crate::utils::fmt_hour;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Fields given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    pub reason: Option<String>,
    pub holiday: Option<HolidayMark>,
}

impl EntryPatch {
    /// Draft of a new entry. Start date and both times are mandatory; the end
    /// date defaults to the start date.
    pub fn into_draft(self) -> AppResult<EntryDraft> {
        let start_date = self
            .start_date
            .ok_or_else(|| AppError::InvalidDate("start date is required".into()))?;
        let start_time = self
            .start_time
            .ok_or_else(|| AppError::InvalidTime("--in is required".into()))?;
        let end_time = self
            .end_time
            .ok_or_else(|| AppError::InvalidTime("--out is required".into()))?;

        Ok(EntryDraft {
            span: WorkSpan::new(
                start_date,
                start_time,
                self.end_date.unwrap_or(start_date),
                end_time,
            ),
            reason: self.reason.unwrap_or_default(),
            holiday: self.holiday.unwrap_or_default(),
        })
    }

    /// Draft of an edited entry: given fields override the current ones.
    /// Moving the start date without an end date keeps the day distance.
    pub fn merge_into(self, current: &WorkEntry) -> EntryDraft {
        let start_date = self.start_date.unwrap_or(current.start_date);
        let end_date = self.end_date.unwrap_or_else(|| {
            start_date + Duration::days((current.end_date - current.start_date).num_days())
        });

        EntryDraft {
            span: WorkSpan::new(
                start_date,
                self.start_time.unwrap_or(current.start_time),
                end_date,
                self.end_time.unwrap_or(current.end_time),
            ),
            reason: self.reason.unwrap_or_else(|| current.reason.clone()),
            holiday: self.holiday.unwrap_or(current.holiday),
        }
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Add a new entry, or replace entry `edit` when given.
    /// `now_ms` seeds the id of a new entry.
    pub fn apply(
        session: &mut Session,
        calendar: &HolidayCalendar,
        patch: EntryPatch,
        edit: Option<i64>,
        now_ms: i64,
    ) -> AppResult<WorkEntry> {
        let (entry, action, operation) = match edit {
            Some(id) => {
                let current = session
                    .entries
                    .get(id)
                    .ok_or(AppError::EntryNotFound(id))?;
                let entry = Core::build_entry(id, patch.merge_into(current), calendar)?;
                (entry.clone(), LedgerAction::Replace(entry), "edit")
            }
            None => {
                let id = session.entries.next_id(now_ms)?;
                let entry = Core::build_entry(id, patch.into_draft()?, calendar)?;
                (entry.clone(), LedgerAction::Add(entry), "add")
            }
        };

        session.entries = session.entries.reduce(action)?;

        ttlog(
            session,
            operation,
            &entry.id.to_string(),
            &format!(
                "{} → {} {} | 연장 {} | 휴일초과 {} | 야간 {}",
                entry.get_date_time(),
                entry.end_date.format("%Y-%m-%d"),
                entry.end_time.format("%H:%M"),
                or_zero(entry.result.overtime),
                or_zero(entry.result.holiday_excess),
                or_zero(entry.result.night),
            ),
        );

        Ok(entry)
    }
}

fn or_zero(mins: i64) -> String {
    if mins == 0 {
        "0".to_string()
    } else {
        fmt_hour(mins)
    }
}
