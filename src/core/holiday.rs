//! Korean public holiday calendar.

use crate::errors::{AppError, AppResult};
use crate::models::HolidayMark;
use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Public and substitute holidays (공휴일 / 대체공휴일 / 근로자의날).
const BUILTIN_HOLIDAYS: &[&str] = &[
    // 2025
    "2025-01-01", "2025-01-28", "2025-01-29", "2025-01-30",
    "2025-03-01", "2025-05-01", "2025-05-05", "2025-05-06",
    "2025-06-06", "2025-08-15", "2025-10-03", "2025-10-05",
    "2025-10-06", "2025-10-07", "2025-10-09", "2025-12-25",
    // 2026
    "2026-01-01", "2026-02-16", "2026-02-17", "2026-02-18",
    "2026-03-01", "2026-05-01", "2026-05-05", "2026-06-06",
    "2026-08-15", "2026-10-03", "2026-10-09", "2026-12-25",
];

#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Calendar with the built-in Korean holidays.
    pub fn builtin() -> Self {
        let dates = BUILTIN_HOLIDAYS.iter().filter_map(|d| parse_date(d)).collect();
        Self { dates }
    }

    /// Add extra dates (company holidays, late-announced substitute days).
    pub fn with_extra<S: AsRef<str>>(mut self, extra: &[S]) -> AppResult<Self> {
        for raw in extra {
            let d = parse_date(raw.as_ref()).ok_or_else(|| {
                AppError::Config(format!("invalid holiday date '{}'", raw.as_ref()))
            })?;
            self.dates.insert(d);
        }
        Ok(self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Sunday or a listed holiday.
    pub fn is_auto_holiday(&self, date: NaiveDate) -> bool {
        date.weekday() == Weekday::Sun || self.contains(date)
    }

    /// Final holiday flag of a start date given the user's mark.
    pub fn resolve(&self, date: NaiveDate, mark: HolidayMark) -> bool {
        if date.weekday() == Weekday::Sun {
            return true;
        }
        match mark {
            HolidayMark::Holiday => true,
            HolidayMark::Workday => false,
            HolidayMark::Auto => self.contains(date),
        }
    }

    /// Listed dates of one year, or all of them.
    pub fn dates(&self, year: Option<i32>) -> Vec<NaiveDate> {
        self.dates
            .iter()
            .copied()
            .filter(|d| year.is_none_or(|y| d.year() == y))
            .collect()
    }
}
