//! Requirements: the user's location constraints.

mod model;
mod store;

pub use model::{Location, Requirement, TravelMode, DEFAULT_DURATION_MINUTES};
pub use store::RequirementStore;
