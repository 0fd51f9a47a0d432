use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Keys every configuration file is expected to carry.
const EXPECTED_KEYS: [&str; 4] = ["session", "template", "output_dir", "extra_holidays"];

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        if path.exists() {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", fs::read_to_string(path)?);
        } else {
            warning(format!(
                "No configuration file at {}; defaults in use:",
                path.display()
            ));
            println!("{}", serde_yaml::to_string(cfg)?);
        }
        Ok(())
    }

    /// Report keys missing from the configuration file. Returns them.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml::from_str(&content)?;
        let mapping = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        let missing: Vec<&'static str> = EXPECTED_KEYS
            .iter()
            .copied()
            .filter(|k| !mapping.contains_key(*k))
            .collect();

        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for k in &missing {
                warning(format!("Missing key '{k}' (default value will be used)"));
            }
        }

        Ok(missing)
    }

    /// Open the configuration file in an editor, falling back to the
    /// platform default when the requested one fails.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                Ok(())
            }
            _ => {
                info(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        default_editor
                    )))
                }
            }
        }
    }
}
