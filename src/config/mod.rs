use crate::core::breaks::LunchWindow;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_lunch_window;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target_hours")]
    pub target_hours: i64,
    #[serde(default = "default_target_minutes")]
    pub target_minutes: i64,
    #[serde(default = "default_lunch_window")]
    pub lunch_window: String,
}

fn default_target_hours() -> i64 {
    7
}
fn default_target_minutes() -> i64 {
    24
}
fn default_lunch_window() -> String {
    "11:30-14:15".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_hours: default_target_hours(),
            target_minutes: default_target_minutes(),
            lunch_window: default_lunch_window(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchsum")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchsum")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchsum.conf")
    }

    /// Resolve the effective config file: the global `--config` override
    /// when given (with ~ expansion), the standard location otherwise.
    pub fn resolve_file(override_path: Option<&str>) -> PathBuf {
        match override_path {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from a file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Persist the configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Daily target in minutes, derived on load from hours + minutes.
    pub fn target_total_minutes(&self) -> i64 {
        self.target_hours * 60 + self.target_minutes
    }

    /// Parse the configured lunch window.
    pub fn lunch_window(&self) -> AppResult<LunchWindow> {
        parse_lunch_window(&self.lunch_window)
            .ok_or_else(|| AppError::InvalidLunchWindow(self.lunch_window.clone()))
    }

    /// Initialize the configuration file with defaults.
    pub fn init_all(custom_path: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::resolve_file(custom_path);

        if !is_test && !path.exists() {
            Config::default().save_to(&path)?;
        }

        Ok(path)
    }
}
