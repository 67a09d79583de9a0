//! HTTP backend client built on reqwest.

use super::types::{
    Backend, BackendError, HousesPage, HousesRequest, MapRequest, MapResponse,
    RequirementSubmission,
};
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for backend requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Production [`Backend`] implementation.
///
/// Uses a pooled async reqwest client; all three endpoints share the same
/// connection pool and timeout.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| BackendError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if !status.is_success() {
            warn!(url = url, status = status.as_u16(), "backend returned error status");
            return Err(BackendError::Http(format!("HTTP {} from {}", status, url)));
        }
        Ok(response)
    }
}

impl Backend for HttpBackend {
    async fn fetch_map(&self, request: MapRequest) -> Result<MapResponse, BackendError> {
        let url = self.url("/map");
        debug!(
            url = %url,
            city = %request.city_code,
            requirements = request.requirement_ids.len(),
            "fetching scored tile map"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Http(format!("map request failed: {}", e)))?;
        let response = Self::check_status(&url, response)?;

        response
            .json::<MapResponse>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    async fn submit_requirement(
        &self,
        request: RequirementSubmission,
    ) -> Result<(), BackendError> {
        let url = self.url("/map/requirement");
        debug!(url = %url, requirement = %request.requirement_id, "submitting requirement");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Http(format!("requirement submission failed: {}", e)))?;
        Self::check_status(&url, response)?;

        // Response body carries nothing the engine needs.
        Ok(())
    }

    async fn fetch_houses(&self, request: HousesRequest) -> Result<HousesPage, BackendError> {
        let url = self.url("/houses");
        debug!(
            url = %url,
            cell = %request.cell_id,
            limit = request.limit,
            cursor = request.cursor.as_deref().unwrap_or("<start>"),
            "fetching house page"
        );

        let mut query: Vec<(&str, String)> = vec![
            ("cellId", request.cell_id.to_string()),
            ("limit", request.limit.to_string()),
        ];
        if let Some(cursor) = &request.cursor {
            query.push(("cursor", cursor.clone()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| BackendError::Http(format!("houses request failed: {}", e)))?;
        let response = Self::check_status(&url, response)?;

        response
            .json::<HousesPage>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
