//! Formatting utilities used for CLI and export outputs.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const WEEKDAYS_KO: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Minutes in the form used by the request sheet: "2시간 30분", "2시간",
/// "45분". Zero renders as an empty string so the cell stays blank.
pub fn fmt_hour(mins: i64) -> String {
    if mins == 0 {
        return String::new();
    }
    let hours = mins / 60;
    let minutes = mins % 60;

    if hours == 0 {
        format!("{}분", minutes)
    } else if minutes == 0 {
        format!("{}시간", hours)
    } else {
        format!("{}시간 {}분", hours, minutes)
    }
}

/// "18:05" → "18시 05분"
pub fn fmt_clock(t: NaiveTime) -> String {
    format!("{}시 {:02}분", t.hour(), t.minute())
}

/// "2025-03-07" → "03/07"
pub fn date_label(d: NaiveDate) -> String {
    format!("{:02}/{:02}", d.month(), d.day())
}

/// Korean one-letter weekday, Sunday first.
pub fn weekday_ko(d: NaiveDate) -> &'static str {
    WEEKDAYS_KO[d.weekday().num_days_from_sunday() as usize]
}

/// "2025년 03월"
pub fn year_month_ko(year: i32, month: u32) -> String {
    format!("{}년 {:02}월", year, month)
}

/// "02h 30m", always with both parts.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Escape text for an XML text node.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
