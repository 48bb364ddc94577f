//! Gemini API integration
//!
//! Provides:
//! - Wire types for the `generateContent` REST protocol
//! - A `reqwest`-backed client for text and image generation
//! - The `GenerativeModel` trait the flows are written against

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Model used for art-idea text generation
pub const IDEA_MODEL: &str = "gemini-2.0-flash";

/// Model used for artwork visualization (image output)
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A single content part: either text or inline binary data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Create an inline-data part
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Base64 inline payload used for image input and output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Content container used in both requests and responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Generation tuning: output modalities and structured-output schema
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    /// Request image output. Without this the API returns text only.
    pub fn image_response() -> Self {
        Self {
            response_modalities: Some(vec!["IMAGE".to_string()]),
            ..Default::default()
        }
    }

    /// Request JSON output conforming to the given schema
    pub fn json_response(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
            ..Default::default()
        }
    }
}

/// A single generation request: model, input parts, optional tuning
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub parts: Vec<Part>,
    pub config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Create a request for the given model and input parts
    pub fn new(model: &str, parts: Vec<Part>) -> Self {
        Self {
            model: model.to_string(),
            parts,
            config: None,
        }
    }

    /// Set the generation config
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Content returned by a generation call
#[derive(Debug, Clone)]
pub struct Generated {
    pub parts: Vec<Part>,
}

impl Generated {
    /// First non-empty text part, if any
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { text } if !text.is_empty() => Some(text.as_str()),
            _ => None,
        })
    }

    /// First non-empty inline image part, if any
    pub fn first_image(&self) -> Option<&InlineData> {
        self.parts.iter().find_map(|part| match part {
            Part::InlineData { inline_data } if !inline_data.data.is_empty() => Some(inline_data),
            _ => None,
        })
    }
}

/// Generation errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Gemini API key not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("empty response from model")]
    Empty,
}

impl GenerateError {
    /// True when the failure indicates the API rate limit was hit.
    ///
    /// Classifies on the structured status code when present. The substring
    /// match is a fallback for errors that lost their status on the way here.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            GenerateError::Api { status, .. } => *status == 429,
            other => other.to_string().contains("429"),
        }
    }
}

/// A generative model capability: text and/or image in, text and/or image out.
///
/// The flows take this as an explicit dependency so tests can substitute a
/// scripted stub for the real API.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<Generated, GenerateError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// HTTP client
    client: Client,
    /// API key
    api_key: Option<String>,
    /// API base URL
    base_url: String,
}

impl GeminiClient {
    /// Create a new client from the environment
    pub fn new() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok();
        let base_url =
            std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_credentials(api_key, base_url)
    }

    /// Create a client with explicit credentials (config-driven)
    pub fn with_credentials(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap(),
            api_key,
            base_url,
        }
    }

    /// Check if an API key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate_content(&self, request: GenerateRequest) -> Result<Generated, GenerateError> {
        let api_key = self.api_key.as_ref().ok_or(GenerateError::NotConfigured)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: request.parts,
            }],
            generation_config: request.config,
        };

        debug!("Sending generateContent request to model {}", request.model);

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, request.model
            ))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("Gemini API error: {} - {}", status, message);
            return Err(GenerateError::Api { status, message });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .find_map(|candidate| candidate.content)
            .map(|content| Generated {
                parts: content.parts,
            })
            .ok_or(GenerateError::Empty)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<Generated, GenerateError> {
        self.generate_content(request).await
    }
}
