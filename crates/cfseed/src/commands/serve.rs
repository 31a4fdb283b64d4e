//! `cfseed serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use cfseed_config::CliSettings;
use cfseed_confluence::ConfluenceClient;
use cfseed_server::{run_server, server_config_from_config};
use clap::Args;

use super::load_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover cfseed.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (log every request).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
        };
        let config = load_config(self.config.as_deref(), Some(&cli_settings))?;

        // Fail at startup rather than on the first form submission
        let conf_config = config.require_confluence()?;
        let client = ConfluenceClient::from_config(conf_config);

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Confluence API: {}", conf_config.base_url));

        let server_config = server_config_from_config(&config);
        run_server(server_config, Arc::new(client))
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
