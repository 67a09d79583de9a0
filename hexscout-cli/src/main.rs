//! hexscout CLI - command-line interface
//!
//! This binary drives the hexscout engine against a scoring backend:
//! submit location requirements, print the scored tile map, and page
//! through a tile's house feed.

use clap::{Parser, Subcommand};
use hexscout::config::ScoutConfig;
use std::path::{Path, PathBuf};
use std::process;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "hexscout")]
#[command(version = hexscout::VERSION)]
#[command(about = "Score hexagonal map tiles against location requirements", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to ~/.hexscout/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit requirements and print the scored tile map
    Map(commands::map::MapArgs),
    /// Page through the house feed for a tile
    Houses(commands::houses::HousesArgs),
}

fn load_config(path: Option<&Path>) -> Result<ScoutConfig, hexscout::config::ConfigError> {
    match path {
        Some(path) => ScoutConfig::load_from(path),
        None => {
            ScoutConfig::ensure_exists()?;
            ScoutConfig::load()
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let _logging_guard = hexscout::logging::init_logging(
        Path::new(&config.logging.directory),
        &config.logging.file,
        false,
    )
    .map_err(|e| eprintln!("Warning: logging disabled: {}", e))
    .ok();
    tracing::info!(version = hexscout::VERSION, "hexscout starting");

    let result = match cli.command {
        Command::Map(args) => commands::map::run(config, args).await,
        Command::Houses(args) => commands::houses::run(config, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
