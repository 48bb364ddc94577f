//! Art-idea generation flow
//!
//! Turns a visitor's free-text concept into a named, described mud-work piece.
//! Fail-open: every failure propagates to the caller, which owns the
//! user-facing error message.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::gemini::{
    GenerateError, GenerateRequest, GenerationConfig, GenerativeModel, Part, IDEA_MODEL,
};

/// A visitor's concept for an art piece
#[derive(Debug, Clone, Deserialize)]
pub struct ArtIdeaRequest {
    /// Free text. The HTTP layer enforces a minimum length before invocation;
    /// the flow itself only requires a string.
    pub prompt: String,
}

/// A generated art concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtIdea {
    /// A creative, evocative name for the piece
    pub name: String,
    /// An artistic description focusing on texture, form, and feeling
    pub description: String,
}

/// Idea-flow errors
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("model returned no text output")]
    EmptyOutput,

    #[error("model output did not match the expected shape: {0}")]
    MalformedOutput(String),
}

fn compose_prompt(prompt: &str) -> String {
    format!(
        r#"You are an artist who specializes in beautiful, handcrafted mud work art.
Your style is earthy, textured, and inspired by the natural world.

A user will provide you with a prompt, which is a concept or feeling they want to see in an art piece.
Based on the user's prompt, generate a creative name and a detailed, artistic description for a new, imagined piece of mud work.

The description should be evocative, focusing on the visual and tactile qualities of the piece (texture, form, color, feeling).

User's prompt: {}"#,
        prompt
    )
}

fn output_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "A creative, evocative name for the art piece."
            },
            "description": {
                "type": "STRING",
                "description": "A detailed, artistic description of the imagined mud work piece, focusing on texture, form, and feeling."
            }
        },
        "required": ["name", "description"]
    })
}

/// Generate an art idea from a visitor prompt
///
/// The model is asked for JSON conforming to [`ArtIdea`]; its output is
/// parsed and validated here rather than trusted. Empty `name` or
/// `description` is rejected, never presented as success.
pub async fn generate_art_idea(
    model: &dyn GenerativeModel,
    request: ArtIdeaRequest,
) -> Result<ArtIdea, FlowError> {
    let instruction = compose_prompt(&request.prompt);

    debug!("Requesting art idea from model");
    let generated = model
        .generate(
            GenerateRequest::new(IDEA_MODEL, vec![Part::text(instruction)])
                .with_config(GenerationConfig::json_response(output_schema())),
        )
        .await?;

    let text = generated.first_text().ok_or(FlowError::EmptyOutput)?;

    let idea: ArtIdea =
        serde_json::from_str(text).map_err(|e| FlowError::MalformedOutput(e.to_string()))?;

    if idea.name.trim().is_empty() || idea.description.trim().is_empty() {
        return Err(FlowError::MalformedOutput(
            "name and description must be non-empty".to_string(),
        ));
    }

    debug!("Generated art idea: {}", idea.name);
    Ok(idea)
}
