//! API error handling
//!
//! Every failure is rendered as
//! `{"timestamp", "status", "error", "message"}`, where `error` is the
//! reason phrase of the status code.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use core_kernel::PortError;
use domain_policy::PolicyError;
use domain_quoting::QuotationError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn internal(error: &PortError) -> Self {
        error!(error = %error, transient = error.is_transient(), "Unhandled infrastructure failure");
        ApiError::Internal(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<QuotationError> for ApiError {
    fn from(err: QuotationError) -> Self {
        match err {
            QuotationError::Store(port) => ApiError::internal(&port),
            other => {
                warn!(reason = %other, "Quotation request rejected");
                ApiError::BadRequest(other.to_string())
            }
        }
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::QuotationNotFound(_) => ApiError::NotFound(err.to_string()),
            PolicyError::QuotationExpired(_) | PolicyError::InvalidArgument(_) => {
                warn!(reason = %err, "Policy request rejected");
                ApiError::BadRequest(err.to_string())
            }
            PolicyError::Port(port) => ApiError::internal(&port),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
