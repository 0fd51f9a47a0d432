use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::SessionFile;
use crate::session::log::ttlog;
use crate::ui::messages::{info, success};

/// Show the applicant, or update the given fields.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Applicant {
        department,
        rank,
        name,
        birthdate,
    } = cmd
    {
        let mut session = SessionFile::open(cfg.session_path())?;

        let updates = [
            (department, &mut session.data.applicant.department),
            (rank, &mut session.data.applicant.rank),
            (name, &mut session.data.applicant.name),
            (birthdate, &mut session.data.applicant.birthdate),
        ];

        let mut changed = false;
        for (value, field) in updates {
            if let Some(v) = value {
                *field = v.trim().to_string();
                changed = true;
            }
        }

        if changed {
            let name = session.data.applicant.name.clone();
            ttlog(&mut session.data, "applicant", &name, "Applicant updated");
            session.commit()?;
            success("Applicant updated.");
        }

        let a = &session.data.applicant;
        if a.is_empty() {
            info("No applicant set. Use --department, --rank, --name, --birthdate.");
        } else {
            println!("신청부서 : {}", a.department);
            println!("직급     : {}", a.rank);
            println!("성명     : {}", a.name);
            println!("생년월일 : {}", a.birthdate);
        }
    }

    Ok(())
}
