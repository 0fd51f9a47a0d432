use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::session::SessionFile;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut session = SessionFile::open(cfg.session_path())?;

        let entry = session
            .data
            .entries
            .get(*id)
            .ok_or(AppError::EntryNotFound(*id))?;

        let prompt = format!(
            "Delete entry #{} ({})? This action is irreversible.",
            id,
            entry.get_date_time()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut session.data, *id)?;
        session.commit()?;

        success(format!(
            "Entry #{} of {} has been deleted.",
            removed.id,
            removed.get_date_time()
        ));
    }

    Ok(())
}
