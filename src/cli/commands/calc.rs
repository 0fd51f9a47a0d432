use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::{EntryDraft, HolidayMark, WorkSpan};
use crate::utils::date::{parse_optional_date, parse_required_date};
use crate::utils::formatting::weekday_ko;
use crate::ui::messages::info;
use crate::utils::mins2readable;
use crate::utils::time::parse_required_time;

/// Classify one session and print the three buckets; nothing is stored.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        date,
        start,
        end,
        end_date,
        holiday,
        workday,
    } = cmd
    {
        let start_date = parse_required_date(date)?;
        let draft = EntryDraft {
            span: WorkSpan::new(
                start_date,
                parse_required_time(start)?,
                parse_optional_date(end_date.as_ref())?.unwrap_or(start_date),
                parse_required_time(end)?,
            ),
            reason: String::new(),
            holiday: HolidayMark::from_flags(*holiday, *workday, false).unwrap_or_default(),
        };

        let calendar = cfg.holiday_calendar()?;
        let (is_holiday, result) = Core::evaluate(&draft, &calendar)?;

        println!(
            "{} ({}){}",
            start_date,
            weekday_ko(start_date),
            if is_holiday { " holiday" } else { "" }
        );
        println!(
            "overtime: {} min ({})",
            result.overtime,
            mins2readable(result.overtime)
        );
        println!(
            "holiday_excess: {} min ({})",
            result.holiday_excess,
            mins2readable(result.holiday_excess)
        );
        println!(
            "night: {} min ({})",
            result.night,
            mins2readable(result.night)
        );

        if result.is_zero() {
            info("Nothing to claim: the session lies inside regulated hours.");
        }
    }

    Ok(())
}
