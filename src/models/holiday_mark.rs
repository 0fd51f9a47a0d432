use serde::{Deserialize, Serialize};

/// How the holiday flag of an entry was decided.
///
/// `Auto` follows the holiday calendar; `Holiday` and `Workday` are explicit
/// user overrides. Sundays are holidays whatever the mark says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayMark {
    #[default]
    Auto,
    Holiday,
    Workday,
}

impl HolidayMark {
    /// Mark requested by the `--holiday` / `--workday` / `--auto-holiday`
    /// switches, `None` when none was given.
    pub fn from_flags(holiday: bool, workday: bool, auto: bool) -> Option<Self> {
        if holiday {
            Some(HolidayMark::Holiday)
        } else if workday {
            Some(HolidayMark::Workday)
        } else if auto {
            Some(HolidayMark::Auto)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayMark::Auto => "auto",
            HolidayMark::Holiday => "holiday",
            HolidayMark::Workday => "workday",
        }
    }
}
