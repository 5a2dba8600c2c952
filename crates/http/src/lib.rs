//! HTTP API server for dinefind.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod response_types;
mod viewer;

use axum::{Json, Router, http::StatusCode, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use dinefind_service::RecommendService;

pub use response_types::{ReadinessResponse, StatsResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Filter-and-rank queries over the loaded restaurant table
    pub recommend_service: Arc<RecommendService>,
}

impl AppState {
    #[must_use]
    pub fn new(recommend_service: Arc<RecommendService>) -> Self {
        Self { recommend_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_search_page))
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route("/api/stats", get(handlers::recommend::stats))
        .route("/recommend", get(handlers::recommend::recommend))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness() -> (StatusCode, Json<ReadinessResponse>) {
    (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
