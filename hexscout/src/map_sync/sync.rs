//! Keyed tile-map synchronization with stale-response discard.

use super::types::{MapKey, MapSnapshot, MapStatus};
use crate::backend::{Backend, MapRequest, Tile};
use crate::cell::CellId;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace, warn};
use uuid::Uuid;

struct MapState {
    tiles: Vec<Tile>,
    status: MapStatus,
    /// Key of the most recently issued fetch; responses for any other key
    /// are dropped on arrival.
    current_key: Option<MapKey>,
}

/// Maintains exactly one authoritative tile set for the current
/// completed-requirement key.
///
/// [`sync`](Self::sync) is safe to call on every requirement mutation: an
/// unchanged key returns without touching the network, and overlapping
/// fetches resolve to the newest key only.
pub struct MapSync<B> {
    backend: Arc<B>,
    city_code: String,
    state: RwLock<MapState>,
}

impl<B: Backend> MapSync<B> {
    pub fn new(backend: Arc<B>, city_code: impl Into<String>) -> Self {
        Self {
            backend,
            city_code: city_code.into(),
            state: RwLock::new(MapState {
                tiles: Vec::new(),
                status: MapStatus::Idle,
                current_key: None,
            }),
        }
    }

    /// Re-fetches the tile map if the derived key changed.
    ///
    /// The key is recorded before the first await, so a later call with a
    /// newer key supersedes this one; the superseded response is discarded
    /// when it eventually arrives. On failure the last-known-good tiles
    /// stay in place and the status flips to [`MapStatus::Failed`].
    pub async fn sync(&self, completed_ids: &[Uuid]) {
        let key = MapKey::new(&self.city_code, completed_ids);
        {
            let Ok(mut state) = self.state.write() else {
                return;
            };
            if state.current_key.as_ref() == Some(&key) {
                trace!("map key unchanged, skipping fetch");
                return;
            }
            state.current_key = Some(key.clone());
            state.status = MapStatus::Fetching;
        }

        let request = MapRequest {
            city_code: self.city_code.clone(),
            requirement_ids: completed_ids.to_vec(),
        };
        let result = self.backend.fetch_map(request).await;

        let Ok(mut state) = self.state.write() else {
            return;
        };
        if state.current_key.as_ref() != Some(&key) {
            debug!("discarding map response for superseded key");
            return;
        }
        match result {
            Ok(response) => {
                debug!(tiles = response.tiles.len(), "tile map updated");
                state.tiles = response.tiles;
                state.status = MapStatus::Ready;
            }
            Err(e) => {
                warn!(error = %e, "map fetch failed; keeping last-known tiles");
                state.status = MapStatus::Failed;
            }
        }
    }

    /// Forgets the current key so the next [`sync`](Self::sync) re-fetches
    /// even with unchanged requirements. Tiles are left in place.
    pub fn invalidate(&self) {
        if let Ok(mut state) = self.state.write() {
            state.current_key = None;
        }
    }

    pub fn snapshot(&self) -> MapSnapshot {
        self.state
            .read()
            .map(|state| MapSnapshot {
                tiles: state.tiles.clone(),
                status: state.status,
            })
            .unwrap_or_default()
    }

    pub fn status(&self) -> MapStatus {
        self.state.read().map(|state| state.status).unwrap_or_default()
    }

    /// Looks up a tile of the current set by cell.
    pub fn find_tile(&self, cell: &CellId) -> Option<Tile> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.tiles.iter().find(|t| &t.cell_id == cell).cloned())
    }
}
