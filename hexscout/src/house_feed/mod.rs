//! Incremental, tile-scoped house feed.

mod feed;
mod types;

pub use feed::HouseFeed;
pub use types::FeedSnapshot;
