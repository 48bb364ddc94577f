//! HTTP API module - REST endpoints
//!
//! Thin plumbing between the site frontend and the core: request validation,
//! status mapping, and the read-only catalog. All AI work happens in
//! `crate::flows`.

mod catalog;
mod flows;
mod inquiry;

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::gemini::GenerativeModel;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<dyn GenerativeModel>,
    pub catalog: Arc<Catalog>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the API router
pub fn router(config: Arc<Config>, model: Arc<dyn GenerativeModel>) -> Router {
    let catalog = Arc::new(Catalog::new());

    let state = AppState {
        config,
        model,
        catalog,
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(flows::router())
        .merge(catalog::router())
        .merge(inquiry::router())
        .layer(TraceLayer::new_for_http())
        // The site frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root endpoint
async fn root() -> impl IntoResponse {
    Json(RootResponse {
        name: "mudworksd",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        ai: if state.config.gemini.api_key.is_some() {
            "configured"
        } else {
            "unconfigured"
        },
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    ai: &'static str,
}
