//! Time utilities: parsing HH:MM and turning wall-clock times into minutes.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_required_time(s)).transpose()
}

/// Minutes since midnight.
pub fn minute_of_day(t: NaiveTime) -> i64 {
    t.hour() as i64 * 60 + t.minute() as i64
}
