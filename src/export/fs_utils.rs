use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Allow writing `path`: free when it is new or `force` is set, otherwise
/// the user must answer yes.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    print!("Overwrite it? [y/N]: ");
    io::stdout().flush()?;

    if confirmed(io::stdin().lock())? {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{} left untouched (use --force to overwrite)",
            path.display()
        )))
    }
}

fn confirmed<R: BufRead>(mut input: R) -> AppResult<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
