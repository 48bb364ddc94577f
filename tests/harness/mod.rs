//! Integration test harness
//!
//! - `TestServer` - serves the real router in-process on an ephemeral port
//! - `StubModel` - a scripted `GenerativeModel` standing in for the Gemini API

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use mudworksd::api;
use mudworksd::config::Config;
use mudworksd::gemini::{GenerateError, GenerateRequest, Generated, GenerativeModel, Part};

/// Scripted outcome for the stub capability
#[derive(Clone)]
pub enum StubOutcome {
    /// Resolve with these response parts
    Parts(Vec<Part>),
    /// Fail with an HTTP 429 from the API
    RateLimited,
    /// Fail with an unclassified API error
    Failure,
}

/// A scripted generative model
pub struct StubModel {
    outcome: StubOutcome,
}

impl StubModel {
    /// Stub that returns the given parts
    pub fn returning(parts: Vec<Part>) -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Parts(parts),
        })
    }

    /// Stub that resolves with no content at all
    pub fn empty() -> Arc<Self> {
        Self::returning(vec![])
    }

    /// Stub that fails with 429 Too Many Requests
    pub fn rate_limited() -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::RateLimited,
        })
    }

    /// Stub that fails with a server error
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Failure,
        })
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, _request: GenerateRequest) -> Result<Generated, GenerateError> {
        match &self.outcome {
            StubOutcome::Parts(parts) => Ok(Generated {
                parts: parts.clone(),
            }),
            StubOutcome::RateLimited => Err(GenerateError::Api {
                status: 429,
                message: "429 Too Many Requests".to_string(),
            }),
            StubOutcome::Failure => Err(GenerateError::Api {
                status: 500,
                message: "internal error".to_string(),
            }),
        }
    }
}

/// Test harness serving the real router in-process on an ephemeral port
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestServer {
    /// Start a server with the given model and a default (unkeyed) config
    pub async fn start(model: Arc<dyn GenerativeModel>) -> Result<Self> {
        Self::start_with_config(Config::default(), model).await
    }

    /// Start a server with an explicit config
    pub async fn start_with_config(
        config: Config,
        model: Arc<dyn GenerativeModel>,
    ) -> Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let router = api::router(Arc::new(config), model);
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;

        // Poll until the server is ready
        let mut ready = false;
        for _ in 0..50 {
            if client
                .get(format!("http://{}/health", addr))
                .send()
                .await
                .is_ok()
            {
                ready = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        if !ready {
            panic!("Server failed to start");
        }

        Ok(Self { addr, client })
    }

    /// Get the base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await?)
    }
}
