/// Shared test helpers
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use roster_server::{create_router, state::AppState};
use roster_store::MemoryStore;
use std::sync::Arc;

/// Build an app backed by an empty in-memory store
pub fn create_test_app() -> Router {
    create_router(AppState::new(Arc::new(MemoryStore::new())))
}

/// Build an app seeded with the demo record (id "1", John Doe)
pub fn create_seeded_app() -> Router {
    create_router(AppState::new(Arc::new(MemoryStore::with_demo_data())))
}

/// Build a JSON request against the users resource
pub fn users_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Read a JSON response body
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
