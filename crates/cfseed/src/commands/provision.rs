//! `cfseed provision` command implementation.

use std::path::PathBuf;

use cfseed_confluence::{ConfluenceClient, SpaceProvisioner};
use clap::Args;

use super::load_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the provision command.
#[derive(Args)]
pub(crate) struct ProvisionArgs {
    /// Key of the space to create the pages in.
    space_key: String,

    /// Path to configuration file (default: auto-discover cfseed.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (log every request).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ProvisionArgs {
    /// Execute the provision command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or no page was created.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let space_key = validate_space_key(&self.space_key)?;
        let config = load_config(self.config.as_deref(), None)?;
        let client = ConfluenceClient::from_config(config.require_confluence()?);

        output.info(&format!("Provisioning space {space_key}..."));
        let report = SpaceProvisioner::new(&client).provision(space_key);
        output.report(&report);

        if report.is_success() {
            Ok(())
        } else {
            Err(CliError::Provision(format!(
                "no pages were created in space {space_key}"
            )))
        }
    }
}

fn validate_space_key(space_key: &str) -> Result<&str, CliError> {
    let key = space_key.trim();
    if key.is_empty() {
        return Err(CliError::Validation("space key cannot be empty".to_owned()));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(CliError::Validation(
            "space key must not contain whitespace".to_owned(),
        ));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_validate_space_key_trims() {
        assert_eq!(validate_space_key(" DEMO ").unwrap(), "DEMO");
    }

    #[test]
    fn test_validate_space_key_rejects_empty() {
        assert!(matches!(
            validate_space_key("   "),
            Err(CliError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_space_key_rejects_inner_whitespace() {
        assert!(validate_space_key("MY SPACE").is_err());
    }
}
