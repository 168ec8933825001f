use crate::errors::{AppError, AppResult};
use crate::ui;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime options read from the YAML config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Minimum number of "date + two times" lines for the layout check to pass.
    #[serde(default = "default_min_day_lines")]
    pub min_day_lines: usize,
    /// Render the report tab-separated instead of space-aligned.
    #[serde(default)]
    pub tab_report: bool,
}

fn default_min_day_lines() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_day_lines: default_min_day_lines(),
            tab_report: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".rbuonipasto"),
            None => PathBuf::from("."),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbuonipasto.conf")
    }

    /// Load configuration from the default location, or return defaults if
    /// the file is missing. An unreadable or invalid file is reported as a
    /// warning and ignored.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match Self::read(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                ui::messages::warning(&format!(
                    "Ignoring invalid config file {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path. Here a failure is a hard
    /// error, the user asked for that file.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        Self::read(path).map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    fn read(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    }
}
