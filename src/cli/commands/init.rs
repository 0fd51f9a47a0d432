use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::SessionFile;
use crate::session::log::ttlog;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped with --test)
///  - the session file, when it does not exist yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rovertime…");

    if let Some(path) = cfg.init_all(cli.test)? {
        info(format!("Config file : {}", path.display()));
    }

    let session_path = cfg.session_path();
    let fresh = !session_path.exists();

    let mut session = SessionFile::open(&session_path)?;
    if fresh {
        ttlog(
            &mut session.data,
            "init",
            "",
            &format!("Session initialized at {}", session_path.display()),
        );
        session.commit()?;
        success(format!("Session     : {}", session_path.display()));
    } else {
        info(format!("Session     : {} (kept)", session_path.display()));
    }

    let template = cfg.template_path();
    if !template.exists() {
        warning(format!(
            "No ODS template at {}: copy the request form there before exporting.",
            template.display()
        ));
    }

    success("rovertime initialization completed!");
    Ok(())
}
