use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Wall-clock interval of one work session (no timezone, no DST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSpan {
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
}

impl WorkSpan {
    pub fn new(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            start_date,
            start_time,
            end_date,
            end_time,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end_date.and_time(self.end_time)
    }

    pub fn crosses_midnight(&self) -> bool {
        self.start_date != self.end_date
    }

    /// Number of calendar days between start and end date.
    pub fn day_diff(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
