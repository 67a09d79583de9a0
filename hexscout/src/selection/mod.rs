//! Cross-cutting hover/selection state.

mod coordinator;

pub use coordinator::{SelectionCoordinator, SelectionState};
