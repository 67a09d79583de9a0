//! Configuration file handling for ~/.hexscout/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. Settings
//! structs live in [`super::settings`], constants in [`super::defaults`].

use super::settings::ScoutConfig;
use ini::{Ini, Properties};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse the config file
    #[error("failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to write the config file
    #[error("failed to write config file: {0}")]
    Write(String),

    /// A key holds a value that does not parse
    #[error("invalid configuration: {section}.{key} = '{value}'")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },

    /// Failed to create the config directory
    #[error("failed to create config directory: {0}")]
    Directory(std::io::Error),
}

impl ScoutConfig {
    /// Loads configuration from the default path (~/.hexscout/config.ini).
    ///
    /// A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Loads configuration from a specific path; missing file yields
    /// defaults, present keys override them section by section.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("backend")) {
            if let Some(base_url) = section.get("base_url") {
                config.backend.base_url = base_url.to_string();
            }
            config.backend.timeout_secs =
                parse_key(section, "backend", "timeout_secs", config.backend.timeout_secs)?;
        }
        if let Some(section) = ini.section(Some("map")) {
            if let Some(city_code) = section.get("city_code") {
                config.map.city_code = city_code.to_string();
            }
        }
        if let Some(section) = ini.section(Some("feed")) {
            config.feed.page_size =
                parse_key(section, "feed", "page_size", config.feed.page_size)?;
        }
        if let Some(section) = ini.section(Some("search")) {
            config.search.debounce_ms =
                parse_key(section, "search", "debounce_ms", config.search.debounce_ms)?;
        }
        if let Some(section) = ini.section(Some("logging")) {
            if let Some(directory) = section.get("directory") {
                config.logging.directory = directory.to_string();
            }
            if let Some(file) = section.get("file") {
                config.logging.file = file.to_string();
            }
        }

        Ok(config)
    }

    /// Saves configuration to the default path (~/.hexscout/config.ini).
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Saves configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Directory)?;
        }
        std::fs::write(path, self.to_ini_string())
            .map_err(|e| ConfigError::Write(e.to_string()))
    }

    /// Creates the default config file if it doesn't exist; returns its path.
    pub fn ensure_exists() -> Result<PathBuf, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }

    fn to_ini_string(&self) -> String {
        format!(
            "[backend]\n\
             base_url = {}\n\
             timeout_secs = {}\n\
             \n\
             [map]\n\
             city_code = {}\n\
             \n\
             [feed]\n\
             page_size = {}\n\
             \n\
             [search]\n\
             debounce_ms = {}\n\
             \n\
             [logging]\n\
             directory = {}\n\
             file = {}\n",
            self.backend.base_url,
            self.backend.timeout_secs,
            self.map.city_code,
            self.feed.page_size,
            self.search.debounce_ms,
            self.logging.directory,
            self.logging.file,
        )
    }
}

fn parse_key<T: FromStr>(
    section: &Properties,
    section_name: &str,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match section.get(key) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            section: section_name.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}

/// Path to the config directory (~/.hexscout).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hexscout")
}

/// Path to the config file (~/.hexscout/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
