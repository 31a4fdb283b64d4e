//! Provisioning API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use cfseed_confluence::ProvisionReport;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::provision_space;
use crate::state::AppState;

/// Request body for POST /api/provision.
#[derive(Debug, Deserialize)]
pub(crate) struct ProvisionRequest {
    /// Target space key.
    #[serde(default)]
    space_id: String,
}

/// Response for POST /api/provision.
#[derive(Serialize)]
pub(crate) struct ProvisionResponse {
    /// Whether at least one page was created.
    success: bool,
    /// Per-page outcome.
    #[serde(flatten)]
    report: ProvisionReport,
}

/// Handle POST /api/provision.
pub(crate) async fn provision(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProvisionRequest>,
) -> Result<Json<ProvisionResponse>, ServerError> {
    let report = provision_space(&state, &request.space_id).await?;
    Ok(Json(ProvisionResponse {
        success: report.is_success(),
        report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_response_serialization() {
        let response = ProvisionResponse {
            success: false,
            report: ProvisionReport {
                space_key: "DEMO".to_owned(),
                skipped: vec!["FAQ".to_owned()],
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["space_key"], "DEMO");
        assert_eq!(json["skipped"][0], "FAQ");
        assert!(json["created"].as_array().unwrap().is_empty());
    }
}
