//! AI flow endpoints
//!
//! POST /api/art-idea  - generate a named art concept from a visitor prompt
//! POST /api/visualize - place artwork into a generated room scene

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;
use tracing::warn;

use super::{AppState, ErrorResponse};
use crate::flows::{self, ArtIdeaRequest, VisualizationRequest};
use crate::payload::DataUri;

/// Minimum prompt length enforced before invoking the idea flow
const MIN_PROMPT_CHARS: usize = 10;

/// Build the flows router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/art-idea", post(art_idea))
        .route("/api/visualize", post(visualize))
}

/// Generate an art idea
///
/// Fail-open: a flow failure surfaces as a gateway error and the frontend
/// renders its own message.
async fn art_idea(
    State(state): State<AppState>,
    Json(request): Json<ArtIdeaRequest>,
) -> impl IntoResponse {
    if request.prompt.chars().count() < MIN_PROMPT_CHARS {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "Please enter at least 10 characters to spark an idea.".to_string(),
            }),
        )
            .into_response();
    }

    match flows::generate_art_idea(state.model.as_ref(), request).await {
        Ok(idea) => (StatusCode::OK, Json(idea)).into_response(),
        Err(e) => {
            warn!("Art idea generation failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Visualization request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizeBody {
    /// The artwork as a `data:<mime>;base64,<data>` payload
    pub artwork_image: String,
    /// Free-text description of the room style
    pub room_style: String,
}

/// Visualize artwork in a room
///
/// Malformed input is rejected here; a well-formed request always gets a 200
/// with the flow's tri-state result.
async fn visualize(
    State(state): State<AppState>,
    Json(body): Json<VisualizeBody>,
) -> impl IntoResponse {
    let artwork = match DataUri::parse(&body.artwork_image) {
        Ok(uri) if uri.is_image() => uri,
        Ok(_) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: "artworkImage must declare an image media type".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: format!("artworkImage: {}", e),
                }),
            )
                .into_response();
        }
    };

    if body.room_style.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "roomStyle must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    let result = flows::visualize_artwork(
        state.model.as_ref(),
        VisualizationRequest {
            artwork,
            room_style: body.room_style,
        },
    )
    .await;

    (StatusCode::OK, Json(result)).into_response()
}
