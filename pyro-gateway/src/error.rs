//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pyro_bridge::BridgeError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A detector invocation failed. Carries the gateway operation name so
    /// the response message says which call went wrong.
    #[error("failed to {operation}: {source}")]
    Bridge {
        operation: &'static str,
        #[source]
        source: BridgeError,
    },

    /// The request body or path is malformed or missing a required value.
    #[error("{0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// Wrap a bridge failure with the operation it interrupted.
    #[must_use]
    pub fn bridge(operation: &'static str, source: BridgeError) -> Self {
        Self::Bridge { operation, source }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Bridge { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
