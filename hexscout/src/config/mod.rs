//! User configuration.
//!
//! An INI file at `~/.hexscout/config.ini` with one section per concern;
//! absent files and absent keys fall back to defaults.

mod defaults;
mod file;
mod settings;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigError};
pub use settings::{
    BackendSettings, FeedSettings, LoggingSettings, MapSettings, ScoutConfig, SearchSettings,
};
