use crate::session::Session;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI color of an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "applicant" => Colour::Cyan,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(session: &Session) {
        if session.log.is_empty() {
            println!("📜 Internal log is empty.");
            return;
        }

        let entries: Vec<(usize, String, &str, String, &str)> = session
            .log
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let date = chrono::DateTime::parse_from_rfc3339(&line.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| line.date.clone());

                let op_target = if line.target.is_empty() {
                    line.operation.clone()
                } else {
                    format!("{} ({})", line.operation, line.target)
                };

                (
                    i + 1,
                    date,
                    line.operation.as_str(),
                    op_target,
                    line.message.as_str(),
                )
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries.len().to_string().len();
        let date_w = entries
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(0);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in entries {
            let color = color_for_operation(operation);

            let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                let mut s = op_target.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }
    }
}
