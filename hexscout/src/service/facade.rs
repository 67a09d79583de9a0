//! Scout service facade implementation.

use crate::backend::{Backend, BackendError, House, HttpBackend, Tile};
use crate::config::ScoutConfig;
use crate::debounce::Debouncer;
use crate::house_feed::{FeedSnapshot, HouseFeed};
use crate::map_sync::{MapSnapshot, MapSync};
use crate::requirement::{Requirement, RequirementStore};
use crate::selection::{SelectionCoordinator, SelectionState};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// High-level facade wiring the stores together.
///
/// Owns one of each engine component over a shared backend client and
/// re-runs the map-sync trigger after every requirement mutation, so
/// callers never have to thread the completed-id key themselves.
///
/// # Example
///
/// ```ignore
/// use hexscout::config::ScoutConfig;
/// use hexscout::service::ScoutService;
///
/// let service = ScoutService::new(ScoutConfig::default())?;
/// service.bootstrap().await;
///
/// let mut requirement = service.add_requirement();
/// requirement.location = Some(work_address);
/// service.update_requirement(requirement).await;
///
/// for tile in service.map_snapshot().tiles {
///     println!("{} {:.1}", tile.cell_id, tile.mean_score);
/// }
/// ```
pub struct ScoutService<B> {
    config: ScoutConfig,
    requirements: RequirementStore<B>,
    map: MapSync<B>,
    feed: Arc<HouseFeed<B>>,
    selection: SelectionCoordinator<B>,
}

impl ScoutService<HttpBackend> {
    /// Creates a service backed by the HTTP client from the configuration.
    pub fn new(config: ScoutConfig) -> Result<Self, BackendError> {
        let backend = Arc::new(HttpBackend::with_timeout(
            &config.backend.base_url,
            config.backend.timeout_secs,
        )?);
        Ok(Self::with_backend(config, backend))
    }
}

impl<B: Backend> ScoutService<B> {
    /// Creates a service over an existing backend client.
    pub fn with_backend(config: ScoutConfig, backend: Arc<B>) -> Self {
        let requirements = RequirementStore::new(backend.clone(), config.map.city_code.clone());
        let map = MapSync::new(backend.clone(), config.map.city_code.clone());
        let feed = Arc::new(HouseFeed::new(backend, config.feed.page_size));
        let selection = SelectionCoordinator::new(feed.clone());
        Self {
            config,
            requirements,
            map,
            feed,
            selection,
        }
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Issues the initial map fetch (typically with no completed
    /// requirements yet), so tiles are available before any editing.
    pub async fn bootstrap(&self) {
        self.resync().await;
    }

    /// Creates a new incomplete requirement for the caller to edit.
    pub fn add_requirement(&self) -> Requirement {
        self.requirements.add()
    }

    /// Upserts a requirement and re-runs the map trigger.
    pub async fn update_requirement(&self, requirement: Requirement) {
        self.requirements.update(requirement).await;
        self.resync().await;
    }

    /// Deletes a requirement and re-runs the map trigger.
    pub async fn delete_requirement(&self, id: Uuid) {
        self.requirements.delete(id);
        self.resync().await;
    }

    /// Re-fetches the tile map if the completed-requirement key changed.
    pub async fn resync(&self) {
        let completed = self.requirements.completed_ids();
        self.map.sync(&completed).await;
    }

    pub fn hover_tile(&self, tile: Option<Tile>) {
        self.selection.hover(tile);
    }

    /// Selects a tile, resetting the house feed to its scope.
    pub async fn select_tile(&self, tile: Option<Tile>) {
        self.selection.select_tile(tile).await;
    }

    /// Loads the next house page for the selected tile.
    pub async fn load_more_houses(&self) {
        self.feed.load_more().await;
    }

    pub fn select_house(&self, address: Option<String>) {
        self.selection.select_house(address);
    }

    /// Builds a debouncer for search-as-you-type input with the configured
    /// delay.
    pub fn search_debouncer<T: Send + 'static>(
        &self,
        action: impl Fn(T) + Send + Sync + 'static,
    ) -> Debouncer<T> {
        Debouncer::new(Duration::from_millis(self.config.search.debounce_ms), action)
    }

    pub fn lookup_house(&self, address: &str) -> Option<House> {
        self.selection.lookup_house(address)
    }

    pub fn selected_house(&self) -> Option<House> {
        self.selection.selected_house()
    }

    pub fn requirements(&self) -> Vec<Requirement> {
        self.requirements.all()
    }

    pub fn submission_error(&self) -> Option<String> {
        self.requirements.submission_error()
    }

    pub fn map_snapshot(&self) -> MapSnapshot {
        self.map.snapshot()
    }

    pub fn feed_snapshot(&self) -> FeedSnapshot {
        self.feed.snapshot()
    }

    pub fn selection_snapshot(&self) -> SelectionState {
        self.selection.snapshot()
    }
}
