use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest, Period};
use crate::session::SessionFile;
use crate::session::log::ttlog;
use crate::utils::date::{parse_optional_date, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        applied_on,
        force,
    } = cmd
    {
        let req = ExportRequest {
            format: format.clone(),
            file: file.clone(),
            period: period.as_deref().map(Period::parse).transpose()?,
            template: cfg.template_path(),
            output_dir: cfg.output_path(),
            applied_on: parse_optional_date(applied_on.as_ref())?.unwrap_or_else(today),
            force: *force,
        };

        let mut session = SessionFile::open(cfg.session_path())?;

        if let Some(path) = ExportLogic::export(&session.data, &req)? {
            ttlog(
                &mut session.data,
                "export",
                format.as_str(),
                &format!("Exported to {}", path.display()),
            );
            session.commit()?;
        }
    }
    Ok(())
}
