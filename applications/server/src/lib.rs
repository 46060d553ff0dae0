//! Roster Server Library
//!
//! User-management REST service: a single `users` resource backed by an
//! in-memory store, plus a health endpoint.
//!
//! This library exposes the router and core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// The users resource lives at a single path and dispatches by method; any
/// other verb hits the 405 fallback.
pub fn create_router(app_state: AppState) -> Router {
    let users = get(api::users::list_users)
        .post(api::users::create_user)
        .put(api::users::update_user)
        .delete(api::users::delete_user)
        .fallback(api::users::method_not_allowed);

    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/users", users);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
