use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Report invalid values and keys missing from the file on disk.
    /// Returns true when everything is in order.
    pub fn check(cfg: &Config, path: &Path) -> AppResult<bool> {
        let mut ok = true;

        for problem in cfg.validate() {
            warning(problem);
            ok = false;
        }

        if path.exists() {
            let missing = migrate::missing_keys(path)?;
            if !missing.is_empty() {
                warning(format!(
                    "Missing keys in {}: {} (run `obras config --migrate`)",
                    path.display(),
                    missing.join(", ")
                ));
                ok = false;
            }
        } else {
            info(format!(
                "No configuration file at {} (defaults in use)",
                path.display()
            ));
        }

        if ok {
            success("Configuration is valid.");
        }
        Ok(ok)
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            info("Nothing to migrate: configuration file not found.");
            return Ok(());
        }

        let added = migrate::fill_missing(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added missing keys: {}", added.join(", ")));
        }
        Ok(())
    }

    /// Open the file in the requested editor, falling back to
    /// $EDITOR / $VISUAL / platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(format!("cannot run '{default_editor}': {e}")))?;
                if status.success() {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "editor '{default_editor}' exited with {status}"
                    )))
                }
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using '{editor_to_use}'"
            ))),
        }
    }
}
