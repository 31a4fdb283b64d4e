//! HTTP request handlers.

pub(crate) mod form;
pub(crate) mod provision;

use cfseed_confluence::{ProvisionReport, SpaceProvisioner};

use crate::error::ServerError;
use crate::state::AppState;

/// Validate the submitted space key, returning it trimmed.
fn space_key(space_id: &str) -> Result<String, ServerError> {
    let key = space_id.trim();
    if key.is_empty() {
        return Err(ServerError::Validation("space_id is required".to_owned()));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(ServerError::Validation(
            "space_id must not contain whitespace".to_owned(),
        ));
    }
    Ok(key.to_owned())
}

/// Provision the space on the blocking pool.
///
/// The Confluence client is synchronous, so the whole run happens off the
/// async executor.
async fn provision_space(state: &AppState, space_id: &str) -> Result<ProvisionReport, ServerError> {
    let space_key = space_key(space_id)?;
    let creator = std::sync::Arc::clone(&state.creator);

    Ok(tokio::task::spawn_blocking(move || {
        SpaceProvisioner::new(&*creator).provision(&space_key)
    })
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_key_trims() {
        assert_eq!(space_key("  DEMO ").unwrap(), "DEMO");
    }

    #[test]
    fn test_space_key_empty() {
        let err = space_key("   ").unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_space_key_inner_whitespace() {
        assert!(space_key("DE MO").is_err());
    }
}
