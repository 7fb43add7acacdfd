use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::core::client::cluster_api::ClusterError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Malformed(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// The cluster API failed; the detail is logged, never returned.
    #[error("K8s API error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::Internal(err.to_string())
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Malformed(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to show a client.
    fn public_message(&self) -> String {
        match self {
            AppError::Upstream(_) => "Kubernetes API request failed".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ClusterError> for AppError {
    fn from(err: ClusterError) -> Self {
        match err {
            ClusterError::NotFound { .. } => AppError::NotFound(err.to_string()),
            ClusterError::AlreadyExists { .. } => AppError::Conflict(err.to_string()),
            ClusterError::Api(msg) => AppError::Upstream(msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect::<Vec<_>>()
            .join(", ");
        AppError::Malformed(details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        match &self {
            AppError::Internal(detail) => error!("Internal error: {}", detail),
            AppError::Upstream(detail) => warn!("Kubernetes API failure: {}", detail),
            _ => {}
        }

        let body = Json(json!({
            "message": self.public_message()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_errors_map_to_status_codes() {
        let not_found: AppError = ClusterError::NotFound { kind: "node", name: "missing".into() }.into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "node 'missing' not found");

        let conflict: AppError = ClusterError::AlreadyExists { kind: "namespace", name: "dev".into() }.into();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let upstream: AppError = ClusterError::Api("connection refused".into()).into();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = internal_error("signing key exploded");
        assert_eq!(err.public_message(), "Internal server error");
        assert_eq!(AppError::Upstream("dial tcp 10.0.0.1:443".into()).public_message(), "Kubernetes API request failed");
        assert_eq!(AppError::Unauthorized("Invalid credentials".into()).public_message(), "Invalid credentials");
    }
}
