use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::totals_of;
use crate::errors::AppResult;
use crate::export::Period;
use crate::models::WorkEntry;
use crate::session::SessionFile;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BLUE, CYAN, RED, RESET, color_for_day, colorize_minutes};
use crate::utils::fmt_hour;
use crate::utils::formatting::fmt_clock;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let period = match period {
            Some(p) => Period::parse(p)?,
            None => Period::All,
        };

        let session = SessionFile::open(cfg.session_path())?;
        let entries = period.select(session.data.entries.entries());

        if entries.is_empty() {
            info(format!("No entries for period '{}'.", period.label()));
            return Ok(());
        }

        header(format!("기록 ({}건) - {}", entries.len(), period.label()));
        println!("{}", render_entries(&entries));
    }
    Ok(())
}

fn render_entries(entries: &[WorkEntry]) -> String {
    let mut table = Table::new(
        [
            "ID", "일자", "요일", "공휴일", "시작", "종료", "사유", "휴일초과", "연장", "야간",
        ]
        .into_iter()
        .map(Column::new)
        .collect(),
    );

    for e in entries {
        let end = if e.crosses_midnight() {
            format!("{} {}", e.end_label(), fmt_clock(e.end_time))
        } else {
            fmt_clock(e.end_time)
        };
        let day_color = color_for_day(e.is_holiday);

        table.add_row(vec![
            e.id.to_string(),
            e.start_label(),
            format!("{day_color}{}{RESET}", e.weekday()),
            if e.is_holiday { "●".into() } else { String::new() },
            fmt_clock(e.start_time),
            end,
            e.reason.clone(),
            colorize_minutes(&fmt_hour(e.result.holiday_excess), RED),
            colorize_minutes(&fmt_hour(e.result.overtime), BLUE),
            colorize_minutes(&fmt_hour(e.result.night), CYAN),
        ]);
    }

    let totals = totals_of(entries);
    table.add_row(vec![
        String::new(),
        "합 계".into(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        colorize_minutes(&fmt_hour(totals.holiday_excess), RED),
        colorize_minutes(&fmt_hour(totals.overtime), BLUE),
        colorize_minutes(&fmt_hour(totals.night), CYAN),
    ]);

    table.render()
}
