use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::weekday_ko;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holidays { year } = cmd {
        let calendar = cfg.holiday_calendar()?;
        let dates = calendar.dates(*year);

        if dates.is_empty() {
            info("No holidays listed for the selected year (Sundays always count).");
            return Ok(());
        }

        for d in dates {
            println!("{} ({})", d, weekday_ko(d));
        }
    }
    Ok(())
}
