// desk-client/tests/local_store.rs
// Local fallback strategy: round-trip and revision behavior through the
// CollectionStore seam.

mod common;

use std::time::{Duration, Instant};

use tempfile::TempDir;

use desk_client::{ClientError, StoreConfig};

use common::{employer_draft, worker_draft};

#[tokio::test]
async fn save_then_fetch_is_json_identical() {
    let dir = TempDir::new().unwrap();
    let store = StoreConfig::local(dir.path().join("desk.redb"))
        .build()
        .unwrap();

    let mut employer = employer_draft("สยามก่อสร้าง");
    employer.id = 1001;
    let mut worker = worker_draft("สมชาย");
    worker.id = 2001;
    employer.workers.push(worker);
    let employers = vec![employer];

    let revision = store.save_employers(&employers, 0).await.unwrap();
    assert_eq!(revision, 1);

    let fetched = store.fetch_employers().await.unwrap();
    assert_eq!(fetched.revision, 1);
    assert_eq!(
        serde_json::to_string(&fetched.items).unwrap(),
        serde_json::to_string(&employers).unwrap()
    );
}

#[tokio::test]
async fn stale_save_maps_to_conflict() {
    let dir = TempDir::new().unwrap();
    let store = StoreConfig::local(dir.path().join("desk.redb"))
        .build()
        .unwrap();

    let employers = vec![employer_draft("A")];
    store.save_employers(&employers, 0).await.unwrap();
    store.save_employers(&employers, 1).await.unwrap();

    let err = store.save_employers(&employers, 1).await.unwrap_err();
    assert!(matches!(err, ClientError::Conflict));
}

#[tokio::test]
async fn simulated_delay_applies_per_call() {
    let dir = TempDir::new().unwrap();
    let store = StoreConfig::local(dir.path().join("desk.redb"))
        .with_simulated_delay(Duration::from_millis(50))
        .build()
        .unwrap();

    let start = Instant::now();
    store.fetch_cases().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn collections_do_not_interfere() {
    let dir = TempDir::new().unwrap();
    let store = StoreConfig::local(dir.path().join("desk.redb"))
        .build()
        .unwrap();

    store
        .save_employers(&[employer_draft("A")], 0)
        .await
        .unwrap();

    let cases = store.fetch_cases().await.unwrap();
    assert_eq!(cases.revision, 0);
    assert!(cases.items.is_empty());
}
