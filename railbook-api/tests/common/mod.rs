#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use railbook_api::{app, AppState};
use railbook_shared::{Station, Train};
use railbook_store::TrainCatalog;
use tower::ServiceExt;

pub fn train(number: &str, source: &str, destination: &str) -> Train {
    Train {
        number: number.to_string(),
        name: format!("Train {}", number),
        train_type: "Express".to_string(),
        source: source.to_string(),
        destination: destination.to_string(),
        departure_time: "06:00".to_string(),
        arrival_time: "12:30".to_string(),
        seats_available: 40,
        fare: 750.0,
        running_days: vec!["Mon".to_string(), "Thu".to_string()],
    }
}

/// Router over a small fixed catalog.
pub fn build_test_app() -> Router {
    let catalog = TrainCatalog::new(
        vec![
            Station::new("NDLS", "New Delhi", "New Delhi", "Delhi"),
            Station::new("HWH", "Howrah Junction", "Kolkata", "West Bengal"),
            Station::new("MAS", "Chennai Central", "Chennai", "Tamil Nadu"),
        ],
        vec![
            train("12301", "HWH", "NDLS"),
            train("12302", "NDLS", "HWH"),
            train("12305", "HWH", "NDLS"),
        ],
    );
    app(AppState::new(catalog))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
