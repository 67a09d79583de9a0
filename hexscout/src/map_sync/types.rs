//! Map synchronization state types.

use crate::backend::Tile;
use uuid::Uuid;

/// Identity of one map computation: the city scope plus the completed
/// requirement ids, order-insensitive.
///
/// Every fetch is tagged with the key it was issued for; a response whose
/// key no longer matches the current one at completion time is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapKey {
    city_code: String,
    sorted_ids: Vec<Uuid>,
}

impl MapKey {
    pub fn new(city_code: &str, requirement_ids: &[Uuid]) -> Self {
        let mut sorted_ids = requirement_ids.to_vec();
        sorted_ids.sort();
        Self {
            city_code: city_code.to_string(),
            sorted_ids,
        }
    }
}

/// Where the tile set currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch for the current key is in flight.
    Fetching,
    /// Tiles match the current key.
    Ready,
    /// The last fetch failed; tiles are the last-known-good set.
    Failed,
}

/// Read-only view of the synchronized map.
#[derive(Debug, Clone, Default)]
pub struct MapSnapshot {
    pub tiles: Vec<Tile>,
    pub status: MapStatus,
}
