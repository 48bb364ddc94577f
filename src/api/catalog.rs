//! Catalog endpoints
//!
//! Read-only product, category, FAQ, and room-style data for the storefront.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use super::AppState;
use crate::catalog::ROOM_STYLES;

/// Build the catalog router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/{id}", get(get_product))
        .route("/api/categories", get(list_categories))
        .route("/api/faqs", get(list_faqs))
        .route("/api/room-styles", get(list_room_styles))
}

/// List all products
async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.products().to_vec())
}

/// Get a product by id
async fn get_product(Path(id): Path<String>, State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.product(&id) {
        Some(product) => Json(product.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Product not found").into_response(),
    }
}

/// List all categories
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.categories().to_vec())
}

/// List all FAQs
async fn list_faqs(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.faqs().to_vec())
}

/// List the visualizer's room-style presets
async fn list_room_styles() -> impl IntoResponse {
    Json(ROOM_STYLES)
}
