//! Server configuration
//!
//! Layered: built-in defaults, then an optional TOML file, then `MUDWORKS_*`
//! environment variables (nested fields split on `__`, e.g.
//! `MUDWORKS_GEMINI__API_KEY`).

use std::net::SocketAddr;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::gemini;

/// Default config file, read when present
pub const DEFAULT_CONFIG_FILE: &str = "mudworksd.toml";

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Gemini API settings
    pub gemini: GeminiConfig,
}

/// Gemini API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key; the AI endpoints report failures until one is set
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            gemini: GeminiConfig {
                api_key: None,
                base_url: gemini::DEFAULT_BASE_URL.to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional TOML file, and the
    /// environment
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        let figment = match path {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };

        let mut config: Config = figment
            .merge(Env::prefixed("MUDWORKS_").split("__"))
            .extract()?;

        // The bare GEMINI_API_KEY var is honored as a fallback
        if config.gemini.api_key.is_none() {
            config.gemini.api_key = std::env::var("GEMINI_API_KEY").ok();
        }

        Ok(config)
    }
}
