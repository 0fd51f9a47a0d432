//! JSON session file: applicant, ledger and internal log of one user.

pub mod log;

use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::models::UserInfo;
use self::log::LogLine;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub applicant: UserInfo,
    #[serde(default)]
    pub entries: Ledger,
    #[serde(default)]
    pub log: Vec<LogLine>,
}

/// Session bound to the file it was loaded from (lightweight for CLI usage).
pub struct SessionFile {
    pub path: PathBuf,
    pub data: Session,
}

impl SessionFile {
    /// Load the session, or start an empty one if the file does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Session::default()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Session::default()
        };

        Ok(Self { path, data })
    }

    /// Write the session back, creating parent folders when needed.
    pub fn commit(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
