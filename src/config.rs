use std::{
    fmt::Write,
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{Result, WorkLogError};

/// Date format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

const CONFIG_FILE_NAME: &str = "config.json";
const DATABASE_FILE_NAME: &str = "worklog.db";

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// SQLite file holding the entries table
    pub database_path: PathBuf,

    /// chrono format used to read and display dates
    pub date_format: String,

    /// Whether to clear the terminal between menus
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        let database_path = project_dirs()
            .map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_NAME));

        Self {
            database_path,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            clear_screen: true,
        }
    }
}

impl Config {
    /// Where the config file lives when `--config` is not given
    pub fn default_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config from `path` (or the default location).
    ///
    /// A missing file yields the defaults; keys absent from the file take
    /// their default values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(&path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| WorkLogError::ConfigError {
                message: format!("Failed to parse {}: {}", path.display(), e),
            })?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes the config as pretty JSON, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|_| WorkLogError::DirectoryError {
                path: parent.to_path_buf(),
            })?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Checks that `date_format` can both render and read back a date
    pub fn validate(&self) -> Result<()> {
        let sample = Local::now().date_naive();
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.date_format)).is_err() {
            return Err(WorkLogError::ConfigError {
                message: format!("Invalid date format: {}", self.date_format),
            });
        }

        match NaiveDate::parse_from_str(&rendered, &self.date_format) {
            Ok(parsed) if parsed == sample => Ok(()),
            _ => Err(WorkLogError::ConfigError {
                message: format!(
                    "Date format {} must include a year, month and day",
                    self.date_format
                ),
            }),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "worklog")
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "database_path": "/tmp/work.db" }"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/work.db"));
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert!(config.clear_screen);
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            database_path: dir.path().join("log.db"),
            date_format: "%d/%m/%Y".into(),
            clear_screen: false,
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(WorkLogError::ConfigError { .. })
        ));
    }

    #[test]
    fn date_format_without_day_is_rejected() {
        let config = Config {
            date_format: "%Y-%m".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
