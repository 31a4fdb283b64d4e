//! Server error type.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Invalid request input.
    #[error("{0}")]
    Validation(String),

    /// The provisioning task panicked or was cancelled.
    #[error("provisioning task failed: {0}")]
    Provision(#[from] tokio::task::JoinError),
}

impl ServerError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Provision(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
