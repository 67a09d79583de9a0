//! Scored tile-map synchronization.
//!
//! One authoritative tile set per completed-requirement key: fetches are
//! keyed, unchanged keys are skipped, and responses arriving for a
//! superseded key are discarded instead of clobbering newer state.

mod sync;
mod types;

pub use sync::MapSync;
pub use types::{MapKey, MapSnapshot, MapStatus};
