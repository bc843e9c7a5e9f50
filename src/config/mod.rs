//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! colour theme, search debounce delay, catalog location and log level.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::filter::DEFAULT_SEARCH_DEBOUNCE;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/catalog-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub search_debounce_ms: u64,
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE.as_millis() as u64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            search_debounce_ms: default_search_debounce_ms(),
            catalog_path: None,
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided or
    /// the default one otherwise. A missing file leaves the defaults in
    /// place; the directory is created so a later save succeeds.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.search_debounce_ms = data.search_debounce_ms;
            self.catalog_path = data.catalog_path;
            self.log_level = data.log_level;
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            search_debounce_ms: self.search_debounce_ms,
            catalog_path: self.catalog_path.clone(),
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Parse the configured log level, falling back to `Info`.
    ///
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("catalog-tui-config-{}", name));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let dir = temp_dir("missing");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
        assert!(config.catalog_path.is_none());
        assert!(dir.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = temp_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "search_debounce_ms: 250\nlog_level: debug\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.log_level_filter(), LevelFilter::Debug);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn saved_theme_is_loaded_back() {
        let dir = temp_dir("save");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.theme_name = "gruvbox".to_string();
        config.catalog_path = Some(PathBuf::from("/srv/projects.yml"));
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.theme_name, "gruvbox");
        assert_eq!(reloaded.catalog_path, Some(PathBuf::from("/srv/projects.yml")));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_without_load_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn invalid_log_level_falls_back_to_info() {
        let config = Config {
            log_level: "chatty".to_string(),
            ..Config::new()
        };
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }
}
