//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// API error type.
///
/// Each variant carries a fixed client-facing message; upstream detail
/// stays in logs, never in the response body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Neither `origin` nor `id` was supplied.
    #[error("Missing required parameter")]
    MissingParameter,

    /// The target URL did not parse.
    #[error("Invalid target URL")]
    InvalidTargetUrl(#[from] url::ParseError),

    /// The target host is not on the allow-list.
    #[error("Domain not allowed")]
    DomainNotAllowed,

    /// The upstream answered with a non-success status, relayed as-is.
    #[error("Failed to fetch file")]
    FetchFailed(StatusCode),

    /// The upstream fetch did not complete.
    #[error("Failed to fetch file")]
    UpstreamUnreachable(#[source] reqwest::Error),

    /// The rate-limit endpoint was unreachable or returned garbage.
    #[error("Failed to fetch rate limits")]
    RateLimitsUnavailable(#[source] reqwest::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter => StatusCode::BAD_REQUEST,
            Self::InvalidTargetUrl(_) => StatusCode::BAD_REQUEST,
            Self::DomainNotAllowed => StatusCode::FORBIDDEN,
            Self::FetchFailed(status) => *status,
            Self::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
            Self::RateLimitsUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
