use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::session::SessionFile;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let session = SessionFile::open(cfg.session_path())?;
        LogLogic::print_log(&session.data);
    }

    Ok(())
}
