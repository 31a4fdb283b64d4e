//! HTTP front-end for cfseed.
//!
//! This crate serves a small axum application with:
//! - `GET /`: an HTML form asking for a space key
//! - `POST /`: provisions the submitted space and shows the outcome
//! - `POST /api/provision`: the same operation as JSON
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use cfseed_confluence::ConfluenceClient;
//! use cfseed_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ConfluenceClient::new(
//!         "https://example.atlassian.net/wiki/rest/api",
//!         "user@example.com",
//!         "token",
//!     );
//!
//!     run_server(ServerConfig::default(), Arc::new(client)).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (cfseed-server)
//!                        │
//!                        └─► spawn_blocking ──► SpaceProvisioner ──► CreatePage
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

pub use state::SharedCreator;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `creator` - Page creator used for every provisioning request
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    creator: SharedCreator,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState { creator });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from cfseed config.
///
/// # Arguments
///
/// * `config` - Loaded configuration
#[must_use]
pub fn server_config_from_config(config: &cfseed_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    }
}
