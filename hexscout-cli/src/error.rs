//! CLI error type.

use hexscout::backend::BackendError;
use hexscout::config::ConfigError;
use thiserror::Error;

/// Errors surfaced to the terminal with a nonzero exit.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The map fetch failed; the engine holds no tiles to print.
    #[error("map fetch failed; check that the backend at the configured base URL is reachable")]
    MapUnavailable,

    /// A houses command named a cell the current map does not contain.
    #[error("cell '{0}' is not present in the current map")]
    UnknownCell(String),
}
