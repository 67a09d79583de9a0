//! Default configuration values.

/// Backend base URL when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// City scope used for map and requirement requests.
pub const DEFAULT_CITY_CODE: &str = "Adelaide";

/// Houses requested per feed page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Delay before a search keystroke is emitted, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Directory for log files, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Log file name.
pub const DEFAULT_LOG_FILE: &str = "hexscout.log";
