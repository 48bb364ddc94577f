//! Contact inquiry endpoint
//!
//! POST /api/inquiry - validate a contact-form submission and acknowledge it.
//! The site hands the visitor off to a messaging channel; nothing is stored.

use std::sync::OnceLock;

use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AppState, ErrorResponse};

/// Build the inquiry router
pub fn router() -> Router<AppState> {
    Router::new().route("/api/inquiry", post(submit_inquiry))
}

/// Inquiry request body
#[derive(Debug, Deserialize)]
pub struct InquiryBody {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Inquiry acknowledgement
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub success: bool,
    pub name: String,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn validate(body: &InquiryBody) -> Result<(), &'static str> {
    if body.name.chars().count() < 2 {
        return Err("Name must be at least 2 characters.");
    }
    if !email_regex().is_match(&body.email) {
        return Err("Please enter a valid email address.");
    }
    if body.message.chars().count() < 10 {
        return Err("Message must be at least 10 characters.");
    }
    Ok(())
}

/// Accept a contact inquiry
async fn submit_inquiry(Json(body): Json<InquiryBody>) -> impl IntoResponse {
    if let Err(message) = validate(&body) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response();
    }

    info!("Inquiry received from {}", body.name);

    (
        StatusCode::OK,
        Json(InquiryResponse {
            success: true,
            name: body.name,
        }),
    )
        .into_response()
}
