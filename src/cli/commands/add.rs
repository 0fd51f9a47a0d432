use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, EntryPatch};
use crate::errors::AppResult;
use crate::models::{HolidayMark, WorkEntry};
use crate::session::SessionFile;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_optional_date;
use crate::utils::fmt_hour;
use crate::utils::formatting::weekday_ko;
use crate::utils::time::parse_optional_time;
use chrono::Local;

/// Add a new entry or edit an existing one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        end_date,
        reason,
        holiday,
        workday,
        auto_holiday,
        edit,
    } = cmd
    {
        let patch = EntryPatch {
            start_date: parse_optional_date(date.as_ref())?,
            start_time: parse_optional_time(start.as_ref())?,
            end_date: parse_optional_date(end_date.as_ref())?,
            end_time: parse_optional_time(end.as_ref())?,
            reason: reason.clone(),
            holiday: HolidayMark::from_flags(*holiday, *workday, *auto_holiday),
        };

        let calendar = cfg.holiday_calendar()?;
        let mut session = SessionFile::open(cfg.session_path())?;

        let entry = AddLogic::apply(
            &mut session.data,
            &calendar,
            patch,
            *edit,
            Local::now().timestamp_millis(),
        )?;

        session.commit()?;

        if entry.holiday == HolidayMark::Auto && calendar.is_auto_holiday(entry.start_date) {
            info(format!(
                "{}요일 {}: holiday auto-detected",
                weekday_ko(entry.start_date),
                entry.start_date
            ));
        }
        if entry.crosses_midnight() {
            info(format!("+{} day(s) past midnight", entry.span().day_diff()));
        }

        let verb = if edit.is_some() { "updated" } else { "added" };
        success(format!("Entry #{} {}: {}", entry.id, verb, describe(&entry)));
    }

    Ok(())
}

fn describe(e: &WorkEntry) -> String {
    let show = |m: i64| {
        let s = fmt_hour(m);
        if s.is_empty() { "-".to_string() } else { s }
    };
    format!(
        "{} {}-{} | 휴일초과 {} | 연장 {} | 야간 {}",
        e.date_str(),
        e.start_time.format("%H:%M"),
        e.end_time.format("%H:%M"),
        show(e.result.holiday_excess),
        show(e.result.overtime),
        show(e.result.night),
    )
}
