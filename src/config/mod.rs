use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the configured database path.
pub const DATABASE_ENV: &str = "RAS_DATABASE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_hours_per_workday")]
    pub hours_per_workday: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_hours_per_workday() -> u32 {
    8
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            hours_per_workday: default_hours_per_workday(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.rasreport)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rasreport")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rasreport.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ras.sqlite")
    }

    /// Load configuration from the standard location.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an
    /// error. `RAS_DATABASE` overrides whatever the file says.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        if let Ok(db) = env::var(DATABASE_ENV)
            && !db.trim().is_empty()
        {
            cfg.database = db;
        }
        Ok(cfg)
    }

    pub fn load_from(path: &std::path::Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        let base = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::config_dir);
        cfg.database = resolve_in(&base, &cfg.database)
            .to_string_lossy()
            .to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
