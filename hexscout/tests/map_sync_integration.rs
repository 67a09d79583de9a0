//! Integration tests for map synchronization.
//!
//! These tests verify the full requirement-to-map workflow:
//! - completed requirements re-keying the tile fetch
//! - the completed-id stability contract suppressing redundant fetches
//! - stale responses being discarded when the key moves on mid-flight
//! - failures retaining the last-known-good tile set

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

use hexscout::backend::{
    Backend, BackendError, HousesPage, HousesRequest, MapRequest, MapResponse,
    RequirementSubmission, Tile,
};
use hexscout::cell::CellId;
use hexscout::map_sync::{MapStatus, MapSync};
use hexscout::requirement::{Location, RequirementStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn tile(cell: &str, mean_score: f64) -> Tile {
    Tile {
        cell_id: CellId::from(cell),
        mean_score,
        requirement_scores: vec![],
    }
}

fn smith_st() -> Location {
    Location {
        address: "12 Smith St".to_string(),
        cell_id: CellId::from("abcd1"),
        lat: -34.92,
        lng: 138.60,
    }
}

/// Backend whose map responses are held until the test opens a gate,
/// making overlapping-fetch races deterministic.
struct GatedBackend {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<MapResponse, BackendError>>>>,
    map_requests: Mutex<Vec<MapRequest>>,
    submissions: Mutex<Vec<RequirementSubmission>>,
}

type Gate = oneshot::Sender<Result<MapResponse, BackendError>>;

impl GatedBackend {
    fn new(gate_count: usize) -> (Arc<Self>, Vec<Gate>) {
        let mut senders = Vec::new();
        let mut receivers = VecDeque::new();
        for _ in 0..gate_count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }
        let backend = Arc::new(Self {
            gates: Mutex::new(receivers),
            map_requests: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
        });
        (backend, senders)
    }

    fn map_request_count(&self) -> usize {
        self.map_requests.lock().unwrap().len()
    }
}

impl Backend for GatedBackend {
    async fn fetch_map(&self, request: MapRequest) -> Result<MapResponse, BackendError> {
        self.map_requests.lock().unwrap().push(request);
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or(Err(BackendError::Http("gate closed".to_string()))),
            None => Ok(MapResponse { tiles: vec![] }),
        }
    }

    async fn submit_requirement(
        &self,
        request: RequirementSubmission,
    ) -> Result<(), BackendError> {
        self.submissions.lock().unwrap().push(request);
        Ok(())
    }

    async fn fetch_houses(&self, _request: HousesRequest) -> Result<HousesPage, BackendError> {
        Ok(HousesPage {
            items: vec![],
            cursor: None,
        })
    }
}

/// Polls until the condition holds, failing the test after two seconds.
async fn wait_for(description: &str, condition: impl Fn() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for: {}", description);
}

// =============================================================================
// Integration Tests
// =============================================================================

#[tokio::test]
async fn test_completed_requirement_triggers_keyed_fetch() {
    let (backend, _gates) = GatedBackend::new(0);
    let store = RequirementStore::new(backend.clone(), "Adelaide");
    let map = MapSync::new(backend.clone(), "Adelaide");

    // Baseline fetch with no completed requirements.
    map.sync(&store.completed_ids()).await;
    assert_eq!(backend.map_request_count(), 1);

    let mut requirement = store.add();
    requirement.location = Some(smith_st());
    store.update(requirement.clone()).await;

    // The completion was pushed to the backend in seconds.
    {
        let submissions = backend.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].requirement_id, requirement.id);
        assert_eq!(submissions[0].tolerated_duration, 30 * 60);
        assert_eq!(submissions[0].locations[0].cell_id, CellId::from("abcd1"));
    }

    // The map is now keyed by exactly that requirement.
    map.sync(&store.completed_ids()).await;
    let map_requests = backend.map_requests.lock().unwrap();
    assert_eq!(map_requests.len(), 2);
    assert_eq!(map_requests[1].requirement_ids, vec![requirement.id]);
}

#[tokio::test]
async fn test_stable_completed_ids_suppress_refetch() {
    let (backend, _gates) = GatedBackend::new(0);
    let store = RequirementStore::new(backend.clone(), "Adelaide");
    let map = MapSync::new(backend.clone(), "Adelaide");

    let mut a = store.add();
    a.location = Some(smith_st());
    store.update(a).await;
    let mut b = store.add();
    b.location = Some(smith_st());
    store.update(b.clone()).await;

    map.sync(&store.completed_ids()).await;
    assert_eq!(backend.map_request_count(), 1);

    // Re-applying an existing requirement leaves the completed set
    // unchanged, so the memoized ids and the map key both hold still.
    let first = store.completed_ids();
    store.update(b).await;
    let second = store.completed_ids();
    assert!(Arc::ptr_eq(&first, &second));

    map.sync(&second).await;
    assert_eq!(backend.map_request_count(), 1);
}

#[tokio::test]
async fn test_stale_map_response_is_discarded() {
    let (backend, mut gates) = GatedBackend::new(2);
    let map = Arc::new(MapSync::new(backend.clone(), "Adelaide"));
    let k1_ids = vec![uuid::Uuid::new_v4()];
    let k2_ids = vec![uuid::Uuid::new_v4(), uuid::Uuid::new_v4()];

    // First fetch (key K1) goes in flight and blocks on its gate.
    let map_k1 = map.clone();
    let ids = k1_ids.clone();
    let sync_k1 = tokio::spawn(async move { map_k1.sync(&ids).await });
    {
        let backend = backend.clone();
        wait_for("K1 fetch issued", move || backend.map_request_count() == 1).await;
    }

    // The key moves on to K2 while K1 is still unresolved.
    let map_k2 = map.clone();
    let ids = k2_ids.clone();
    let sync_k2 = tokio::spawn(async move { map_k2.sync(&ids).await });
    {
        let backend = backend.clone();
        wait_for("K2 fetch issued", move || backend.map_request_count() == 2).await;
    }

    // K1's response arrives late and must not become visible.
    gates
        .remove(0)
        .send(Ok(MapResponse {
            tiles: vec![tile("stale", 1.0)],
        }))
        .unwrap();
    sync_k1.await.unwrap();
    assert!(map.snapshot().tiles.is_empty());
    assert_eq!(map.status(), MapStatus::Fetching);

    // K2's response lands normally.
    gates
        .remove(0)
        .send(Ok(MapResponse {
            tiles: vec![tile("fresh", 90.0)],
        }))
        .unwrap();
    sync_k2.await.unwrap();

    let snapshot = map.snapshot();
    assert_eq!(snapshot.status, MapStatus::Ready);
    assert_eq!(snapshot.tiles, vec![tile("fresh", 90.0)]);
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_tiles() {
    let (backend, mut gates) = GatedBackend::new(2);
    let map = Arc::new(MapSync::new(backend.clone(), "Adelaide"));

    let map_task = map.clone();
    let sync_ok = tokio::spawn(async move { map_task.sync(&[]).await });
    {
        let backend = backend.clone();
        wait_for("baseline fetch issued", move || backend.map_request_count() == 1).await;
    }
    gates
        .remove(0)
        .send(Ok(MapResponse {
            tiles: vec![tile("abcd1", 75.0)],
        }))
        .unwrap();
    sync_ok.await.unwrap();
    assert_eq!(map.status(), MapStatus::Ready);

    let map_task = map.clone();
    let failing_ids = vec![uuid::Uuid::new_v4()];
    let sync_err = tokio::spawn(async move { map_task.sync(&failing_ids).await });
    {
        let backend = backend.clone();
        wait_for("second fetch issued", move || backend.map_request_count() == 2).await;
    }
    gates
        .remove(0)
        .send(Err(BackendError::Http("HTTP 503 from /map".to_string())))
        .unwrap();
    sync_err.await.unwrap();

    let snapshot = map.snapshot();
    assert_eq!(snapshot.status, MapStatus::Failed);
    assert_eq!(snapshot.tiles, vec![tile("abcd1", 75.0)]);
}
