//! Scoring-backend client abstraction.
//!
//! This module defines the wire types for the three backend contracts (tile
//! map fetch, requirement submit/replace, house-page fetch), the [`Backend`]
//! trait the rest of the engine consumes, and the production HTTP
//! implementation.

mod http;
mod types;

pub use http::HttpBackend;
pub use types::{
    Backend, BackendError, House, HousesPage, HousesRequest, MapRequest, MapResponse,
    RequirementScore, RequirementSubmission, SubmittedLocation, Tile,
};
