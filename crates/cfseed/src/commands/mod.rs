//! CLI command implementations.

pub(crate) mod provision;
pub(crate) mod serve;
pub(crate) mod tree;

use std::path::Path;

use cfseed_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use provision::ProvisionArgs;
pub(crate) use serve::ServeArgs;

/// Load configuration and log where it came from.
fn load_config(path: Option<&Path>, settings: Option<&CliSettings>) -> Result<Config, CliError> {
    let config = Config::load(path, settings)?;
    match &config.config_path {
        Some(path) => tracing::info!(path = %path.display(), "Loaded configuration"),
        None => tracing::info!("No cfseed.toml found, using defaults and environment"),
    }
    Ok(config)
}
