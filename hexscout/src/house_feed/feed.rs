//! Tile-scoped incremental house pagination.

use super::types::FeedSnapshot;
use crate::backend::{Backend, House, HousesPage, HousesRequest};
use crate::cell::CellId;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

struct FeedState {
    items: Vec<House>,
    /// Addresses already in `items`; appends skip entries seen before.
    seen: HashSet<String>,
    cursor: Option<String>,
    is_loading: bool,
    has_more: bool,
    scope: Option<CellId>,
    /// Bumped on every reset; a response carrying an older generation
    /// belongs to a superseded tile scope and is dropped.
    generation: u64,
}

impl FeedState {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            cursor: None,
            is_loading: false,
            has_more: true,
            scope: None,
            generation: 0,
        }
    }

    /// Applies one successful page. `has_more` derives from the raw page
    /// length and cursor presence only, so the feed always terminates on a
    /// finite backend.
    fn apply_page(&mut self, page: HousesPage, limit: usize) {
        let page_len = page.items.len();
        self.cursor = page.cursor.clone();
        self.has_more = page_len >= limit && page.cursor.is_some();
        for house in page.items {
            if self.seen.insert(house.address.clone()) {
                self.items.push(house);
            }
        }
        self.is_loading = false;
    }
}

/// Cursor-paginated house collection scoped to the selected tile.
///
/// The state machine is: a tile selection synchronously resets the feed and
/// issues the fresh page; `load_more` appends pages while the previous page
/// was full and carried a continuation cursor. The `is_loading` flag is set
/// before the first await of either path, which is what keeps two page
/// fetches from ever being in flight together.
pub struct HouseFeed<B> {
    backend: Arc<B>,
    limit: usize,
    state: RwLock<FeedState>,
}

impl<B: Backend> HouseFeed<B> {
    pub fn new(backend: Arc<B>, limit: usize) -> Self {
        Self {
            backend,
            limit,
            state: RwLock::new(FeedState::new()),
        }
    }

    /// Resets the feed to the given cell and loads its first page.
    ///
    /// The reset happens before any suspension, so no reader ever observes
    /// the old tile's houses under the new scope. A failed fresh load
    /// leaves an empty, halted feed (`has_more = false`) and does not
    /// retry.
    pub async fn select_tile(&self, cell: CellId) {
        let generation = {
            let Ok(mut state) = self.state.write() else {
                return;
            };
            state.generation += 1;
            state.items.clear();
            state.seen.clear();
            state.cursor = None;
            state.is_loading = true;
            state.has_more = true;
            state.scope = Some(cell.clone());
            state.generation
        };
        debug!(cell = %cell, "house feed reset for new tile scope");

        let result = self
            .backend
            .fetch_houses(HousesRequest {
                cell_id: cell,
                limit: self.limit,
                cursor: None,
            })
            .await;

        let Ok(mut state) = self.state.write() else {
            return;
        };
        if state.generation != generation {
            debug!("discarding house page for superseded tile scope");
            return;
        }
        match result {
            Ok(page) => {
                debug!(items = page.items.len(), has_cursor = page.cursor.is_some(), "fresh house page loaded");
                state.apply_page(page, self.limit);
            }
            Err(e) => {
                warn!(error = %e, "fresh house page failed; halting feed");
                state.items.clear();
                state.seen.clear();
                state.cursor = None;
                state.has_more = false;
                state.is_loading = false;
            }
        }
    }

    /// Fetches the next page for the current scope.
    ///
    /// No-op while a load is in flight, once the feed is exhausted, or
    /// before any tile has been selected. A failed append leaves items and
    /// cursor untouched so the user can try again.
    pub async fn load_more(&self) {
        let (generation, cell, cursor) = {
            let Ok(mut state) = self.state.write() else {
                return;
            };
            if state.is_loading || !state.has_more {
                return;
            }
            let Some(cell) = state.scope.clone() else {
                return;
            };
            state.is_loading = true;
            (state.generation, cell, state.cursor.clone())
        };

        let result = self
            .backend
            .fetch_houses(HousesRequest {
                cell_id: cell,
                limit: self.limit,
                cursor,
            })
            .await;

        let Ok(mut state) = self.state.write() else {
            return;
        };
        if state.generation != generation {
            debug!("discarding house page for superseded tile scope");
            return;
        }
        match result {
            Ok(page) => {
                debug!(items = page.items.len(), total = state.items.len() + page.items.len(), "house page appended");
                state.apply_page(page, self.limit);
            }
            Err(e) => {
                warn!(error = %e, "house page append failed; keeping existing items");
                state.is_loading = false;
            }
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.state
            .read()
            .map(|state| FeedSnapshot {
                items: state.items.clone(),
                cursor: state.cursor.clone(),
                is_loading: state.is_loading,
                has_more: state.has_more,
                scope: state.scope.clone(),
            })
            .unwrap_or_else(|_| FeedSnapshot {
                items: Vec::new(),
                cursor: None,
                is_loading: false,
                has_more: false,
                scope: None,
            })
    }

    /// Finds a house by address in the current items only.
    pub fn find(&self, address: &str) -> Option<House> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.items.iter().find(|h| h.address == address).cloned())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
