use super::{DAY_MINUTES, HOLIDAY_OVERTIME_CAP, RegulatedWindow, night_minutes, overtime_candidate};
use crate::errors::{AppError, AppResult};
use crate::models::{MinuteBuckets, WorkSpan};
use crate::utils::time::minute_of_day;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// Minutes between midnight of `base` and `date time`.
pub fn minute_offset(base: NaiveDate, date: NaiveDate, time: NaiveTime) -> i64 {
    (date - base).num_days() * DAY_MINUTES + minute_of_day(time)
}

/// Split a span into overtime, holiday-excess and night minutes.
///
/// `is_holiday` is the resolved flag of the start day; Sundays are treated as
/// holidays regardless. An empty or inverted span yields all zeros.
pub fn classify(span: &WorkSpan, is_holiday: bool) -> MinuteBuckets {
    let (from, to) = span_offsets(span);

    if to <= from {
        return MinuteBuckets::zero();
    }

    let weekday = span.start_date.weekday();
    let holiday_rules = is_holiday || weekday == Weekday::Sun;

    let window = if holiday_rules {
        None
    } else {
        RegulatedWindow::for_weekday(weekday)
    };

    let candidate = overtime_candidate(from, to, window);
    let night = night_minutes(from, to);

    if holiday_rules {
        MinuteBuckets {
            overtime: candidate.min(HOLIDAY_OVERTIME_CAP),
            holiday_excess: (candidate - HOLIDAY_OVERTIME_CAP).max(0),
            night,
        }
    } else {
        MinuteBuckets {
            overtime: candidate,
            holiday_excess: 0,
            night,
        }
    }
}

/// Start and end of the span in minutes since midnight of the start day.
fn span_offsets(span: &WorkSpan) -> (i64, i64) {
    (
        minute_offset(span.start_date, span.start_date, span.start_time),
        minute_offset(span.start_date, span.end_date, span.end_time),
    )
}

/// Like [`classify`], but rejects spans whose end is not after the start
/// once both are truncated to the minute.
pub fn try_classify(span: &WorkSpan, is_holiday: bool) -> AppResult<MinuteBuckets> {
    let (from, to) = span_offsets(span);
    if to <= from {
        return Err(AppError::InvalidRange {
            start: span.start().format("%Y-%m-%d %H:%M").to_string(),
            end: span.end().format("%Y-%m-%d %H:%M").to_string(),
        });
    }
    Ok(classify(span, is_holiday))
}
