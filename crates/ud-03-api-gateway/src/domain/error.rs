//! API Gateway error types with HTTP status mapping.
//!
//! Every failure leaves the gateway as `{"code": ..., "message": ...}`.

use crate::domain::config::ConfigError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use ud_02_user_directory::{DirectoryError, GatewayError as UpstreamError, Rejection};

/// Machine-readable error codes
pub mod codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const SIGNATURE_REJECTED: &str = "SIGNATURE_REJECTED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFLICT: &str = "CONFLICT";
    pub const UPSTREAM_UNAVAILABLE: &str = "UPSTREAM_UNAVAILABLE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Error body returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// API error with HTTP status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Malformed body or failed field validation
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, codes::INVALID_REQUEST, details)
    }

    /// Unexpected failure
    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::INTERNAL_ERROR,
            details,
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        let message = e.to_string();
        match e {
            DirectoryError::Conflict(_) => {
                Self::new(StatusCode::CONFLICT, codes::CONFLICT, message)
            }
            DirectoryError::InvalidCredentials => Self::new(
                StatusCode::FORBIDDEN,
                codes::INVALID_CREDENTIALS,
                message,
            ),
            DirectoryError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, codes::NOT_FOUND, message)
            }
            DirectoryError::InvalidRequest(_) => Self::invalid_request(message),
            DirectoryError::Gateway(UpstreamError::Unavailable(_))
            | DirectoryError::Gateway(UpstreamError::InvalidResponse(_)) => {
                warn!(error = %message, "Upstream service failed");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    codes::UPSTREAM_UNAVAILABLE,
                    message,
                )
            }
            DirectoryError::Store(_) => {
                error!(error = %message, "Identity store failed");
                Self::internal(message)
            }
        }
    }
}

impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        let message = rejection.to_string();
        match rejection {
            Rejection::SignatureNotVerified(_) => Self::new(
                StatusCode::UNAUTHORIZED,
                codes::SIGNATURE_REJECTED,
                message,
            ),
            Rejection::Conflict(_) => Self::new(StatusCode::CONFLICT, codes::CONFLICT, message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code.to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Gateway startup / serving errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration rejected by `validate`
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Listener or connection failure
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
