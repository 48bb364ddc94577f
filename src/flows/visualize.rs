//! Artwork visualization flow
//!
//! Places a piece of artwork into a generated room scene matching a requested
//! style. Fail-closed: the flow never returns an error. Every outcome is
//! normalized into a [`Visualization`] the UI can branch on directly.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::gemini::{GenerateRequest, GenerationConfig, GenerativeModel, Part, IMAGE_MODEL};
use crate::payload::DataUri;

/// A request to visualize artwork in a room
#[derive(Debug, Clone)]
pub struct VisualizationRequest {
    /// The artwork image payload
    pub artwork: DataUri,
    /// Free-text description of the room style
    pub room_style: String,
}

/// Caller-meaningful failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The API signalled HTTP 429; the caller should suggest trying later
    RateLimited,
    /// Anything else: no image produced, or an unclassified failure
    GenerationFailed,
}

/// The outcome of a visualization
///
/// Exactly one of the two holds: a non-empty `generated_image` with no error
/// kind, or an empty image with an error kind. The constructors maintain this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    /// Generated room image as a data URI, or empty on failure
    pub generated_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl Visualization {
    fn image(image: DataUri) -> Self {
        Self {
            generated_image: image.to_string(),
            error_kind: None,
        }
    }

    fn failed(kind: ErrorKind) -> Self {
        Self {
            generated_image: String::new(),
            error_kind: Some(kind),
        }
    }

    /// True when an image was produced
    pub fn is_success(&self) -> bool {
        self.error_kind.is_none()
    }
}

fn compose_instruction(room_style: &str) -> String {
    format!(
        r#"You are an expert interior designer. Your task is to place the provided artwork onto a prominent wall within a photorealistic image of a room that matches the following style: "{}".

- The artwork should be the clear focal point of the generated image.
- The lighting in the room should complement the artwork.
- Maintain the original aspect ratio and style of the artwork.
- Do not add any text, watermarks, or other artifacts to the image.
- The final output must be only the generated image."#,
        room_style
    )
}

/// Visualize artwork in a room matching the requested style
///
/// Always resolves. Failure paths are folded into the result so the
/// interactive caller never needs a catch:
/// - no image in the response: `generation-failed`
/// - failure carrying an HTTP 429 indicator: `rate-limited`
/// - any other failure: `generation-failed`
pub async fn visualize_artwork(
    model: &dyn GenerativeModel,
    request: VisualizationRequest,
) -> Visualization {
    let instruction = compose_instruction(&request.room_style);

    let generate = GenerateRequest::new(
        IMAGE_MODEL,
        vec![
            Part::text(instruction),
            Part::inline_data(request.artwork.mime_type(), request.artwork.data()),
        ],
    )
    // Must be requested explicitly; the default response is text-only
    .with_config(GenerationConfig::image_response());

    match model.generate(generate).await {
        Ok(generated) => match generated.first_image() {
            Some(image) => {
                Visualization::image(DataUri::from_base64(&image.mime_type, &image.data))
            }
            None => {
                warn!("Visualization response contained no image");
                Visualization::failed(ErrorKind::GenerationFailed)
            }
        },
        Err(e) => {
            warn!("Error generating visualization: {}", e);
            if e.is_rate_limited() {
                Visualization::failed(ErrorKind::RateLimited)
            } else {
                Visualization::failed(ErrorKind::GenerationFailed)
            }
        }
    }
}
