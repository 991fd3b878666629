//! `HttpReferenceApi` against the real API router bound on an ephemeral port.

use railbook_api::{app, AppState};
use railbook_client::{BookingSession, HttpReferenceApi};
use railbook_core::{FetchError, FixedPnrGenerator, ReferenceDataSource, TicketOutcome};
use railbook_store::TrainCatalog;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

async fn spawn_api() -> SocketAddr {
    let dir = env!("CARGO_MANIFEST_DIR");
    let catalog = TrainCatalog::from_files(
        format!("{}/../railbook-store/data/stations.json", dir),
        format!("{}/../railbook-store/data/trains.json", dir),
    )
    .expect("seed data should load");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(AppState::new(catalog))).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_fetches_reference_data_over_http() {
    let addr = spawn_api().await;
    let api = HttpReferenceApi::new(&format!("http://{}/api", addr));

    let stations = api.fetch_stations().await.unwrap();
    assert!(stations.iter().any(|s| s.code == "NDLS" && s.name == "New Delhi"));

    let trains = api.fetch_trains().await.unwrap();
    assert!(!trains.is_empty());

    let results = api.search_trains("BCT", "NDLS").await.unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|t| t.source == "BCT" && t.destination == "NDLS"));
}

#[tokio::test]
async fn test_search_query_is_encoded() {
    let addr = spawn_api().await;
    let api = HttpReferenceApi::new(&format!("http://{}/api", addr));

    let results = api.search_trains("BCT&to=XYZ", "NDLS").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let addr = spawn_api().await;
    let api = HttpReferenceApi::new(&format!("http://{}/wrong-prefix", addr));

    match api.fetch_trains().await {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_api_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpReferenceApi::with_timeout(&format!("http://{}/api", addr), Duration::from_secs(2)).unwrap();
    assert!(matches!(api.fetch_stations().await, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn test_session_mounts_against_live_api() {
    let addr = spawn_api().await;
    let api: Arc<dyn ReferenceDataSource> = Arc::new(HttpReferenceApi::new(&format!("http://{}/api", addr)));
    let session = BookingSession::new(api, Box::new(FixedPnrGenerator::new("PNR12345678")));

    session.mount().await;
    let view = session.snapshot().await;
    assert!(!view.trains.is_empty());
    assert!(!view.stations.is_empty());
    assert!(!view.has_notice());

    session
        .update(|v| {
            v.set_from("NDLS");
            v.set_to("BPL");
        })
        .await;
    assert_eq!(session.search_trains().await, Some(TicketOutcome::Applied));
    let view = session.snapshot().await;
    assert!(view.trains.iter().all(|t| t.source == "NDLS" && t.destination == "BPL"));
}
