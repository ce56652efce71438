//! Transfer-limit status handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::error::{ApiError, ApiResult};
use crate::http::server::AppState;

/// `GET /limit` response body.
#[derive(Debug, Serialize)]
pub struct RateLimitStatus {
    pub page: &'static str,
    pub transfer_limit_used_percentage: String,
    pub transfer_limit: String,
    pub transfer_limit_used: String,
}

/// `GET /limit` — report upstream transfer-limit usage.
pub async fn rate_limit_status(State(state): State<AppState>) -> ApiResult<Json<RateLimitStatus>> {
    let usage = state
        .upstream
        .rate_limits()
        .await
        .map_err(ApiError::RateLimitsUnavailable)?;

    Ok(Json(RateLimitStatus {
        page: "Rate Limit Page",
        transfer_limit_used_percentage: format_percentage(
            usage.transfer_limit_used,
            usage.transfer_limit,
        ),
        transfer_limit: format_megabytes(usage.transfer_limit),
        transfer_limit_used: format_megabytes(usage.transfer_limit_used),
    }))
}

/// Usage percentage, two decimals. A zero limit yields "inf%"/"NaN%";
/// the figure is relayed rather than masked.
fn format_percentage(used: f64, limit: f64) -> String {
    format!("{:.2}%", used / limit * 100.0)
}

/// Byte count in megabytes (SI, 1 MB = 1_000_000 bytes), two decimals.
fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1_000_000.0)
}
