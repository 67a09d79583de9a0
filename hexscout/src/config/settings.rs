//! Settings structs for all configuration sections.
//!
//! Each struct mirrors one `[section]` of the INI config file; parsing and
//! serialization live in [`super::file`].

use super::defaults::*;

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub backend: BackendSettings,
    pub map: MapSettings,
    pub feed: FeedSettings,
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            backend: BackendSettings::default(),
            map: MapSettings::default(),
            feed: FeedSettings::default(),
            search: SearchSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// `[backend]` — how to reach the scoring backend.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[map]` — map scope.
#[derive(Debug, Clone)]
pub struct MapSettings {
    pub city_code: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            city_code: DEFAULT_CITY_CODE.to_string(),
        }
    }
}

/// `[feed]` — house feed pagination.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub page_size: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// `[search]` — address search input.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// `[logging]` — log file location.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub directory: String,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: DEFAULT_LOG_DIR.to_string(),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
