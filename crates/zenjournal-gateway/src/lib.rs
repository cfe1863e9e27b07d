// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the ZenJournal service.
//!
//! Serves the journal REST API on axum. Auth endpoints and the health
//! probe are public; everything else sits behind bearer-token
//! middleware that resolves an [`zenjournal_core::types::Identity`]
//! before a handler runs.

pub mod auth;
pub mod handlers;
pub mod server;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use zenjournal_auth::SessionManager;
use zenjournal_entries::EntryController;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Account and session lifecycle.
    pub sessions: Arc<SessionManager>,
    /// Entry lifecycle, scoped per identity.
    pub controller: Arc<EntryController>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(sessions: Arc<SessionManager>, controller: Arc<EntryController>) -> Self {
        Self {
            sessions,
            controller,
            start_time: Instant::now(),
        }
    }
}

/// Builds the full application router.
///
/// Routes:
/// - `GET /health`, `POST /api/auth/signup`, `POST /api/auth/login` (public)
/// - `POST /api/auth/logout`, `GET /api/auth/session` (auth)
/// - `GET|POST /api/entries`, `GET|DELETE /api/entries/{id}` (auth)
/// - `POST /api/analyze`, `GET /api/moods` (auth)
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .route("/api/auth/signup", post(handlers::post_signup))
        .route("/api/auth/login", post(handlers::post_login))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route("/api/auth/logout", post(handlers::post_logout))
        .route("/api/auth/session", get(handlers::get_session))
        .route(
            "/api/entries",
            get(handlers::get_entries).post(handlers::post_entry),
        )
        .route(
            "/api/entries/{id}",
            get(handlers::get_entry).delete(handlers::delete_entry),
        )
        .route("/api/analyze", post(handlers::post_analyze))
        .route("/api/moods", get(handlers::get_moods))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::require_identity,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
