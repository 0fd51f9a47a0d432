use crate::core::holiday::HolidayCalendar;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// JSON session file holding applicant, entries and internal log
    pub session: String,
    /// ODS request-form template
    pub template: String,
    /// Folder where `export --format ods` writes when no --file is given
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Extra holiday dates (YYYY-MM-DD) on top of the built-in calendar
    #[serde(default)]
    pub extra_holidays: Vec<String>,
}

fn default_output_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: Self::session_file().to_string_lossy().to_string(),
            template: Self::template_file().to_string_lossy().to_string(),
            output_dir: default_output_dir(),
            extra_holidays: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rovertime")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rovertime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rovertime.conf")
    }

    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.json")
    }

    pub fn template_file() -> PathBuf {
        Self::config_dir().join("template.ods")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn session_path(&self) -> PathBuf {
        expand_tilde(&self.session)
    }

    pub fn template_path(&self) -> PathBuf {
        expand_tilde(&self.template)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn holiday_calendar(&self) -> AppResult<HolidayCalendar> {
        HolidayCalendar::builtin().with_extra(&self.extra_holidays)
    }

    /// Create the config directory and write the configuration file.
    /// With `is_test` nothing is written: tests must not touch $HOME.
    pub fn init_all(&self, is_test: bool) -> AppResult<Option<PathBuf>> {
        if is_test {
            return Ok(None);
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !path.exists() {
            let yaml = serde_yaml::to_string(self)?;
            fs::write(&path, yaml)?;
        }

        Ok(Some(path))
    }
}
