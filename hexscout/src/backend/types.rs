//! Wire types shared with the scoring backend.
//!
//! The backend owns tile scoring and house listings; the engine only ever
//! reads `Tile` and `House` values out of these responses. Field casing
//! follows the backend's JSON surface (camelCase).

use crate::cell::CellId;
use crate::requirement::TravelMode;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;
use uuid::Uuid;

/// Errors from backend operations.
///
/// Transport failures are stringified at the boundary so the error stays
/// cheap to clone into status flags and mock responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Per-requirement suitability score for one tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementScore {
    pub requirement_id: Uuid,
    pub score: f64,
}

/// One scored hexagonal tile.
///
/// Produced only by the backend map computation; read-only to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub cell_id: CellId,
    pub mean_score: f64,
    pub requirement_scores: Vec<RequirementScore>,
}

/// One candidate house. Identity is the `address` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub address: String,
    pub url: String,
    pub cell_id: CellId,
    pub lat: f64,
    pub lng: f64,
}

/// Request body for the scored-tile map fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    pub city_code: String,
    pub requirement_ids: Vec<Uuid>,
}

/// Response body for the scored-tile map fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapResponse {
    pub tiles: Vec<Tile>,
}

/// One anchor location inside a requirement submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedLocation {
    pub id: i32,
    pub address: String,
    pub cell_id: CellId,
    pub lat: f64,
    pub lng: f64,
}

/// Request body for the submit/replace-requirement endpoint.
///
/// `tolerated_duration` is in seconds on the wire even though requirements
/// are edited in minutes; use [`crate::requirement::Requirement::to_submission`]
/// rather than building this by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSubmission {
    pub city_code: String,
    pub requirement_id: Uuid,
    pub tolerated_duration: u32,
    pub travel_mode: TravelMode,
    pub locations: Vec<SubmittedLocation>,
}

/// Parameters for one house-feed page fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct HousesRequest {
    pub cell_id: CellId,
    pub limit: usize,
    /// Continuation token from the previous page; `None` starts the feed.
    pub cursor: Option<String>,
}

/// One page of houses plus the continuation token, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousesPage {
    pub items: Vec<House>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Async client for the three backend contracts the engine consumes.
///
/// Every store takes the backend through this trait so tests can drive the
/// engine with scripted responses and controlled latency.
pub trait Backend: Send + Sync {
    /// Fetches the scored tile map for a set of completed requirements.
    fn fetch_map(
        &self,
        request: MapRequest,
    ) -> impl Future<Output = Result<MapResponse, BackendError>> + Send;

    /// Submits or replaces one requirement on the backend.
    ///
    /// Fire-and-forget from the engine's perspective; completion only
    /// confirms server acceptance.
    fn submit_requirement(
        &self,
        request: RequirementSubmission,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Fetches one page of houses for a tile.
    fn fetch_houses(
        &self,
        request: HousesRequest,
    ) -> impl Future<Output = Result<HousesPage, BackendError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_request_wire_casing() {
        let id = Uuid::new_v4();
        let request = MapRequest {
            city_code: "Adelaide".to_string(),
            requirement_ids: vec![id],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["cityCode"], "Adelaide");
        assert_eq!(json["requirementIds"][0], id.to_string());
    }

    #[test]
    fn test_tile_deserializes_from_backend_casing() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"cellId":"abcd1","meanScore":72.5,"requirementScores":[{{"requirementId":"{}","score":80.0}}]}}"#,
            id
        );

        let tile: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile.cell_id, CellId::from("abcd1"));
        assert!((tile.mean_score - 72.5).abs() < f64::EPSILON);
        assert_eq!(tile.requirement_scores.len(), 1);
        assert_eq!(tile.requirement_scores[0].requirement_id, id);
    }

    #[test]
    fn test_houses_page_cursor_is_optional() {
        let json = r#"{"items":[]}"#;
        let page: HousesPage = serde_json::from_str(json).unwrap();
        assert!(page.items.is_empty());
        assert!(page.cursor.is_none());

        let json = r#"{"items":[],"cursor":"k1"}"#;
        let page: HousesPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.cursor.as_deref(), Some("k1"));
    }

    #[test]
    fn test_submission_duration_is_seconds_field() {
        let submission = RequirementSubmission {
            city_code: "Adelaide".to_string(),
            requirement_id: Uuid::new_v4(),
            tolerated_duration: 1800,
            travel_mode: TravelMode::Drive,
            locations: vec![],
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["toleratedDuration"], 1800);
        assert_eq!(json["travelMode"], "drive");
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::Http("HTTP 503 from /map".to_string());
        assert_eq!(format!("{}", err), "HTTP error: HTTP 503 from /map");

        let err = BackendError::InvalidResponse("missing field `tiles`".to_string());
        assert_eq!(format!("{}", err), "invalid response: missing field `tiles`");
    }
}
