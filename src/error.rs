//! Gateway error types with HTTP status code mapping.
//!
//! [`SparkError`] is the error type at the HTTP boundary. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Remote-service and storage failures are normally absorbed below this
//! layer; they surface here only where an operation cannot produce a
//! meaningful substitute (e.g. a frame that could not be stored).

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::IdeaId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "idea not found or expired: k3j9x2"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see the table on [`SparkError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Builds a response body without details.
    #[must_use]
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code,
                message: message.into(),
                details: None,
            },
        }
    }
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category         | HTTP Status                       |
/// |-----------|------------------|-----------------------------------|
/// | 1000–1999 | Validation       | 400 Bad Request                   |
/// | 2000–2999 | State/Not Found  | 403 / 404 / 409                   |
/// | 3000–3999 | Server           | 500 Internal Server Error         |
#[derive(Debug, thiserror::Error)]
pub enum SparkError {
    /// Malformed request body or parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Filter value outside the known vocabulary.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// No live frame snapshot for this idea.
    #[error("idea not found or expired: {0}")]
    IdeaNotFound(IdeaId),

    /// The deck has no current idea to act on.
    #[error("no current idea")]
    NoCurrentIdea,

    /// A generation or expansion is already in flight.
    #[error("{0} already in progress")]
    Busy(&'static str),

    /// The operation needs the premium flag.
    #[error("premium required to unlock AI-powered idea expansions")]
    PremiumRequired,

    /// Storage failure that could not be absorbed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SparkError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidFilter(_) => 1002,
            Self::IdeaNotFound(_) => 2001,
            Self::NoCurrentIdea => 2002,
            Self::Busy(_) => 2003,
            Self::PremiumRequired => 2004,
            Self::Internal(_) => 3000,
            Self::Storage(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            Self::IdeaNotFound(_) | Self::NoCurrentIdea => StatusCode::NOT_FOUND,
            Self::Busy(_) => StatusCode::CONFLICT,
            Self::PremiumRequired => StatusCode::FORBIDDEN,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for SparkError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for SparkError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidFilter(rejection.body_text())
    }
}

impl SparkError {
    /// Maps a rejected filter body. Every filter field is optional, so a
    /// body that parses as JSON but not as filters names an unknown tag.
    #[must_use]
    pub fn from_filter_body(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::InvalidFilter(e.body_text()),
            other => other.into(),
        }
    }
}

impl IntoResponse for SparkError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse::new(self.error_code(), self.to_string());
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
