//! Requirement set ownership and the completed-id stability contract.

use super::model::Requirement;
use crate::backend::Backend;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};
use uuid::Uuid;

/// Owns the requirement set and derives the completed-requirement key that
/// drives map recomputation.
///
/// All mutation goes through this store; readers get snapshots. The
/// [`completed_ids`](Self::completed_ids) view is memoized so that callers
/// keying work off it (the map sync trigger) re-fire only when the set of
/// complete ids actually changes in content, not merely in order.
pub struct RequirementStore<B> {
    backend: Arc<B>,
    city_code: String,
    requirements: RwLock<Vec<Requirement>>,
    /// Last value handed out by `completed_ids`, reused while the content
    /// is unchanged.
    completed: RwLock<Arc<[Uuid]>>,
    /// Most recent submission failure, cleared on the next success.
    submission_error: RwLock<Option<String>>,
}

impl<B: Backend> RequirementStore<B> {
    pub fn new(backend: Arc<B>, city_code: impl Into<String>) -> Self {
        Self {
            backend,
            city_code: city_code.into(),
            requirements: RwLock::new(Vec::new()),
            completed: RwLock::new(Arc::from(Vec::new())),
            submission_error: RwLock::new(None),
        }
    }

    /// Creates a new incomplete requirement and appends it to the set.
    pub fn add(&self) -> Requirement {
        let requirement = Requirement::new(Uuid::new_v4());
        if let Ok(mut requirements) = self.requirements.write() {
            requirements.push(requirement.clone());
        }
        debug!(id = %requirement.id, "requirement added");
        requirement
    }

    /// Replaces the entry with a matching id, or appends it (upsert).
    ///
    /// A complete requirement is submitted to the backend before the local
    /// replacement; the local commit happens regardless of the submission
    /// outcome, and a failure is held in [`submission_error`](Self::submission_error)
    /// for the presentation layer instead of being returned.
    pub async fn update(&self, requirement: Requirement) {
        if let Some(submission) = requirement.to_submission(&self.city_code) {
            match self.backend.submit_requirement(submission).await {
                Ok(()) => {
                    debug!(id = %requirement.id, "requirement submitted");
                    if let Ok(mut error) = self.submission_error.write() {
                        *error = None;
                    }
                }
                Err(e) => {
                    warn!(id = %requirement.id, error = %e, "requirement submission failed; keeping local edit");
                    if let Ok(mut error) = self.submission_error.write() {
                        *error = Some(e.to_string());
                    }
                }
            }
        }

        if let Ok(mut requirements) = self.requirements.write() {
            match requirements.iter_mut().find(|r| r.id == requirement.id) {
                Some(existing) => *existing = requirement,
                None => requirements.push(requirement),
            }
        }
    }

    /// Removes the entry with that id; no-op if absent.
    ///
    /// Deletion is client-side only: map fetches are keyed by the explicit
    /// id list, so a stale backend-side requirement can no longer influence
    /// scoring.
    pub fn delete(&self, id: Uuid) {
        if let Ok(mut requirements) = self.requirements.write() {
            let before = requirements.len();
            requirements.retain(|r| r.id != id);
            if requirements.len() < before {
                debug!(%id, "requirement deleted");
            }
        }
    }

    /// Ids of all complete requirements, in insertion order.
    ///
    /// Returns the previously handed-out `Arc` whenever the id content is
    /// unchanged (order ignored), so `Arc::ptr_eq` can serve as a cheap
    /// did-anything-change test downstream.
    pub fn completed_ids(&self) -> Arc<[Uuid]> {
        let current: Vec<Uuid> = self
            .requirements
            .read()
            .map(|requirements| {
                requirements
                    .iter()
                    .filter(|r| r.is_complete())
                    .map(|r| r.id)
                    .collect()
            })
            .unwrap_or_default();

        let cached = self
            .completed
            .read()
            .map(|c| c.clone())
            .unwrap_or_else(|_| Arc::from(Vec::new()));

        let mut cached_sorted = cached.to_vec();
        cached_sorted.sort();
        let mut current_sorted = current.clone();
        current_sorted.sort();
        if cached_sorted == current_sorted {
            return cached;
        }

        let fresh: Arc<[Uuid]> = current.into();
        if let Ok(mut slot) = self.completed.write() {
            *slot = fresh.clone();
        }
        fresh
    }

    /// Snapshot of the full requirement set, incomplete entries included.
    pub fn all(&self) -> Vec<Requirement> {
        self.requirements
            .read()
            .map(|requirements| requirements.clone())
            .unwrap_or_default()
    }

    pub fn get(&self, id: Uuid) -> Option<Requirement> {
        self.requirements
            .read()
            .ok()
            .and_then(|requirements| requirements.iter().find(|r| r.id == id).cloned())
    }

    /// Most recent submission failure, if the last submission failed.
    pub fn submission_error(&self) -> Option<String> {
        self.submission_error
            .read()
            .ok()
            .and_then(|error| error.clone())
    }
}
