//! mudworksd - MudWorks AI backend daemon
//!
//! Backend for the MudWorks handcrafted-art site: the showcase catalog and
//! two AI flows (art-idea generation, artwork visualization) over the Gemini
//! API.

pub mod api;
pub mod catalog;
pub mod config;
pub mod flows;
pub mod gemini;
pub mod payload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use config::Config;
use gemini::{GeminiClient, GenerativeModel};

/// The mudworksd server instance
pub struct Server {
    config: Config,
    model: Arc<dyn GenerativeModel>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Server {
    /// Create a new server instance backed by the Gemini API
    pub fn new(config: Config) -> Self {
        let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::with_credentials(
            config.gemini.api_key.clone(),
            config.gemini.base_url.clone(),
        ));
        Self::with_model(config, model)
    }

    /// Create a server with an explicit generative model (tests inject stubs)
    pub fn with_model(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            model,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Build the router
    fn router(&self) -> Router {
        api::router(Arc::new(self.config.clone()), self.model.clone())
    }

    /// Run the server until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("mudworksd listening on {}", local_addr);

        let router = self.router();
        let mut shutdown_rx = self.shutdown_rx.clone();

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.changed().await.ok();
            })
            .await?;

        info!("mudworksd shutdown complete");
        Ok(())
    }

    /// Signal the server to shutdown
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Get the configured bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
