#![allow(dead_code)]

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use tufan_server::routes::create_routes;
use tufan_server::services::{CatalogStore, PricingConfig, RecommenderClient};
use tufan_server::state::AppState;

pub fn event_json(id: &str, category: &str, tags: &[&str], sold: u32, lat: f64, lng: f64) -> Value {
    json!({
        "id": id,
        "title": format!("Event {id}"),
        "description": "",
        "startTime": "2026-06-15T12:00:00Z",
        "endTime": "2026-06-15T23:00:00Z",
        "location": {
            "name": "Venue", "address": "1 Main St", "city": "New York", "state": "NY",
            "postalCode": "10001", "country": "USA",
            "latitude": lat, "longitude": lng
        },
        "organizer": { "id": "org-1", "name": "Organizer" },
        "category": category,
        "tags": tags,
        "imageUrl": "",
        "pricing": {
            "currency": "USD",
            "basePrice": 49.99,
            "tiers": [
                { "name": "General Admission", "price": 49.99, "availableQuantity": 1800 },
                { "name": "All Access", "price": 349.99, "availableQuantity": 300 }
            ]
        },
        "capacity": 10000,
        "ticketsSold": sold,
        "status": "upcoming",
        "featured": false,
        "createdAt": "2026-01-01T00:00:00Z",
        "updatedAt": "2026-01-01T00:00:00Z"
    })
}

pub fn catalog_of(events: Vec<Value>) -> CatalogStore {
    CatalogStore::from_json(&Value::Array(events).to_string()).unwrap()
}

pub fn app_with(catalog: CatalogStore, ml_service_url: &str) -> Router {
    let recommender = RecommenderClient::new(ml_service_url, Duration::from_secs(2)).unwrap();
    create_routes(AppState::new(catalog, recommender, PricingConfig::default()))
}

pub fn app(catalog: CatalogStore) -> Router {
    app_with(catalog, "http://127.0.0.1:9")
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn ids(values: &Value) -> Vec<String> {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn assert_amount(value: &Value, expected: f64) {
    let actual = value
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {value}"));
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
