//! Regulated working window and the overtime candidate computed against it.

use chrono::Weekday;

/// Regulated hours of the start day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegulatedWindow {
    pub start: i64,
    pub end: i64,
}

impl RegulatedWindow {
    pub const WEEKDAY: RegulatedWindow = RegulatedWindow {
        start: 9 * 60,
        end: 17 * 60 + 30,
    };

    pub const SATURDAY: RegulatedWindow = RegulatedWindow {
        start: 9 * 60,
        end: 12 * 60 + 30,
    };

    /// Sunday has no regulated window: every minute is holiday work.
    pub fn for_weekday(day: Weekday) -> Option<RegulatedWindow> {
        match day {
            Weekday::Sun => None,
            Weekday::Sat => Some(Self::SATURDAY),
            _ => Some(Self::WEEKDAY),
        }
    }

    /// Minutes of `[from, to)` worked before the window opens plus minutes
    /// worked after it closes. The window only exists on day 0.
    pub fn outside_minutes(&self, from: i64, to: i64) -> i64 {
        let before = (to.min(self.start) - from).max(0);
        let after = (to - from.max(self.end)).max(0);
        before + after
    }
}

/// Minutes of `[from, to)` that may count as overtime.
///
/// On a holiday the whole span counts; otherwise only what lies outside the
/// regulated window of the start day.
pub fn overtime_candidate(from: i64, to: i64, window: Option<RegulatedWindow>) -> i64 {
    if to <= from {
        return 0;
    }
    match window {
        None => to - from,
        Some(w) => w.outside_minutes(from, to),
    }
}
