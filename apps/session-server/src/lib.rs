//! Buddybox Session Server
//!
//! HTTP surface over the session store: start and end sessions, pair
//! buddies, and encrypt or decrypt on a session's behalf.

pub mod config;
mod error;
mod extract;
mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use crypto_session::SessionStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};

/// Application state
#[derive(Clone, Default)]
pub struct AppState {
    /// Live sessions; owned here for the lifetime of the server
    pub store: Arc<SessionStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/start_session", post(routes::start_session))
        .route("/end_session", post(routes::end_session))
        .route("/pair_sessions", post(routes::pair_sessions))
        .route("/encrypt", post(routes::encrypt))
        .route("/decrypt", post(routes::decrypt))
        .route("/health", get(routes::health))
        .route("/stats", get(routes::stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
