use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "work";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Database file; empty means the default data location.
    #[serde(default)]
    pub database: String,
}

/// `$VAR` when set and non-empty, otherwise `<home>/<fallback>`.
fn xdg_dir(var: &str, fallback: &str) -> AppResult<PathBuf> {
    match env::var_os(var) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => {
            let home = dirs::home_dir().ok_or(AppError::DataDir)?;
            Ok(home.join(fallback))
        }
    }
}

impl Config {
    /// `$XDG_DATA_HOME/work`, or `~/.local/share/work`
    pub fn data_dir() -> AppResult<PathBuf> {
        Ok(xdg_dir("XDG_DATA_HOME", ".local/share")?.join(APP_DIR))
    }

    /// Default location of the SQLite database
    pub fn database_file() -> AppResult<PathBuf> {
        Ok(Self::data_dir()?.join("database.db"))
    }

    /// `$XDG_CONFIG_HOME/work`, or `~/.config/work`
    pub fn config_dir() -> AppResult<PathBuf> {
        Ok(xdg_dir("XDG_CONFIG_HOME", ".config")?.join(APP_DIR))
    }

    pub fn config_file() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.yml"))
    }

    /// Load the configuration file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<PathBuf> {
        let path = Self::config_file()?;
        fs::create_dir_all(Self::config_dir()?)?;

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(&path, yaml)?;
        Ok(path)
    }
}
