//! Self-describing encoded image payloads
//!
//! Artwork travels between the browser and the generation API as a data URI:
//! `data:<mime>;base64,<data>`. The string carries its own media type, so the
//! original bytes can be reconstructed without any external lookup.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use regex::Regex;
use thiserror::Error;

/// Payload parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("not a base64 data URI (expected data:<mime>;base64,<data>)")]
    InvalidFormat,

    #[error("payload is not valid base64")]
    InvalidBase64,
}

/// A `data:<mime>;base64,<data>` payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime_type: String,
    data: String,
}

fn data_uri_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^data:([a-zA-Z0-9!#$&^_.+-]+/[a-zA-Z0-9!#$&^_.+-]+);base64,([A-Za-z0-9+/]*={0,2})$")
            .unwrap()
    })
}

impl DataUri {
    /// Parse a data URI, validating the media type and base64 payload
    pub fn parse(s: &str) -> Result<Self, PayloadError> {
        let captures = data_uri_regex()
            .captures(s)
            .ok_or(PayloadError::InvalidFormat)?;

        let mime_type = captures[1].to_string();
        let data = captures[2].to_string();

        // The regex restricts the alphabet; decoding still catches bad padding
        BASE64
            .decode(data.as_bytes())
            .map_err(|_| PayloadError::InvalidBase64)?;

        Ok(Self { mime_type, data })
    }

    /// Build a payload from raw bytes
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data: BASE64.encode(bytes),
        }
    }

    /// Build a payload from already-encoded base64 data
    pub fn from_base64(mime_type: &str, data: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        }
    }

    /// The declared media type (e.g. `image/png`)
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64-encoded payload, without the URI envelope
    pub fn data(&self) -> &str {
        &self.data
    }

    /// True when the declared media type is an image type
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Reconstruct the original bytes
    pub fn decode(&self) -> Result<Vec<u8>, PayloadError> {
        BASE64
            .decode(self.data.as_bytes())
            .map_err(|_| PayloadError::InvalidBase64)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

impl FromStr for DataUri {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
