/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for empty cells, the bucket color otherwise.
pub fn colorize_minutes(value: &str, color: &'static str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}

/// Sundays and holidays are printed in red, like on a calendar.
pub fn color_for_day(is_holiday: bool) -> &'static str {
    if is_holiday { RED } else { RESET }
}
