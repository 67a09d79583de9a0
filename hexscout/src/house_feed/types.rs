//! House-feed view types.

use crate::backend::House;
use crate::cell::CellId;

/// Read-only view of the feed for the presentation layer.
///
/// `cursor == None` right after a reset means "start of feed", not "no more
/// data"; `has_more` is the authoritative end-of-data flag.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub items: Vec<House>,
    pub cursor: Option<String>,
    pub is_loading: bool,
    pub has_more: bool,
    /// Cell the feed is currently scoped to, if any tile has been selected.
    pub scope: Option<CellId>,
}
