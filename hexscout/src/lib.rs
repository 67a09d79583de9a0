//! hexscout - client-side synchronization engine for hex-tile house scouting
//!
//! The engine keeps three independently-latent async data sources coherent
//! for a map UI: a set of user location requirements, the scored hexagonal
//! tile map derived from them, and a cursor-paginated feed of candidate
//! houses scoped to the selected tile.
//!
//! # High-Level API
//!
//! Most consumers go through the [`service`] facade:
//!
//! ```ignore
//! use hexscout::config::ScoutConfig;
//! use hexscout::service::ScoutService;
//!
//! let service = ScoutService::new(ScoutConfig::load()?)?;
//! service.bootstrap().await;
//! ```
//!
//! The individual stores ([`requirement::RequirementStore`],
//! [`map_sync::MapSync`], [`house_feed::HouseFeed`],
//! [`selection::SelectionCoordinator`]) are public for callers that need
//! finer-grained wiring.

pub mod backend;
pub mod cell;
pub mod config;
pub mod debounce;
pub mod house_feed;
pub mod logging;
pub mod map_sync;
pub mod requirement;
pub mod selection;
pub mod service;

/// Version of the hexscout library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
