//! Hover and selection state coordination.

use crate::backend::{Backend, House, Tile};
use crate::cell::CellId;
use crate::house_feed::HouseFeed;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Explicit hover/selection state. Owned by the coordinator; everything
/// else reads it through snapshots.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub hovered_tile: Option<Tile>,
    pub selected_tile: Option<Tile>,
    /// May reference a house no longer present in the feed; resolve it
    /// through [`SelectionCoordinator::lookup_house`] and tolerate `None`.
    pub selected_house_address: Option<String>,
}

/// Coordinates tile hover/selection and the chosen house across the map
/// and the house feed.
///
/// The coordinator never mutates the other stores beyond delegating the
/// feed reset on tile selection; house lookups read the feed's current
/// items and nothing else.
pub struct SelectionCoordinator<B> {
    feed: Arc<HouseFeed<B>>,
    state: RwLock<SelectionState>,
}

impl<B: Backend> SelectionCoordinator<B> {
    pub fn new(feed: Arc<HouseFeed<B>>) -> Self {
        Self {
            feed,
            state: RwLock::new(SelectionState::default()),
        }
    }

    pub fn hover(&self, tile: Option<Tile>) {
        if let Ok(mut state) = self.state.write() {
            state.hovered_tile = tile;
        }
    }

    /// Selects a tile and resets the house feed to its scope.
    ///
    /// `None` clears the selection and leaves the feed as it was; the feed
    /// keeps serving the previous tile until a new one is chosen.
    pub async fn select_tile(&self, tile: Option<Tile>) {
        match tile {
            Some(tile) => {
                let cell = tile.cell_id.clone();
                debug!(cell = %cell, "tile selected");
                if let Ok(mut state) = self.state.write() {
                    state.selected_tile = Some(tile);
                }
                self.feed.select_tile(cell).await;
            }
            None => {
                if let Ok(mut state) = self.state.write() {
                    state.selected_tile = None;
                }
            }
        }
    }

    pub fn select_house(&self, address: Option<String>) {
        if let Ok(mut state) = self.state.write() {
            state.selected_house_address = address;
        }
    }

    /// Resolves an address against the feed's current items.
    ///
    /// Misses yield `None` — including the transient miss right after a
    /// tile change reset the feed underneath a still-selected address.
    pub fn lookup_house(&self, address: &str) -> Option<House> {
        self.feed.find(address)
    }

    /// The currently selected house, if its address is resolvable in the
    /// current feed.
    pub fn selected_house(&self) -> Option<House> {
        let address = self
            .state
            .read()
            .ok()
            .and_then(|state| state.selected_house_address.clone())?;
        self.lookup_house(&address)
    }

    pub fn selected_cell(&self) -> Option<CellId> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.selected_tile.as_ref().map(|t| t.cell_id.clone()))
    }

    pub fn snapshot(&self) -> SelectionState {
        self.state
            .read()
            .map(|state| state.clone())
            .unwrap_or_default()
    }
}
