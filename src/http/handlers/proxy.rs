//! Streaming file proxy handler.

use axum::{
    body::Body,
    extract::{Query, State},
    http::header::{HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use url::Url;

use crate::http::error::{ApiError, ApiResult};
use crate::http::server::AppState;

/// Query parameters for `GET /api`.
///
/// Exactly one form is honored per request; `origin` wins when both
/// are supplied. Empty values count as absent.
#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    /// Literal file URL to fetch.
    pub origin: Option<String>,
    /// Opaque file identifier, expanded to a download URL on the
    /// configured file host.
    pub id: Option<String>,
}

/// `GET /api` — fetch an allow-listed file and stream it back.
pub async fn proxy_file(
    State(state): State<AppState>,
    Query(params): Query<ProxyParams>,
) -> ApiResult<Response> {
    let target = resolve_target(&params, &state.config.file_proxy.file_host_url)
        .ok_or(ApiError::MissingParameter)?;
    let target_url = Url::parse(&target)?;

    let host = target_url.host_str().unwrap_or_default();
    if !host_allowed(host, &state.config.file_proxy.allowed_hosts) {
        tracing::warn!(host = %host, "Proxy target domain not allowed");
        return Err(ApiError::DomainNotAllowed);
    }

    let upstream = state
        .upstream
        .fetch_file(target_url.as_str())
        .await
        .map_err(ApiError::UpstreamUnreachable)?;

    let status = upstream.status();
    if !status.is_success() {
        tracing::warn!(status = %status, url = %target_url, "Upstream fetch failed");
        return Err(ApiError::FetchFailed(status));
    }

    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));
    let content_disposition = upstream
        .headers()
        .get(CONTENT_DISPOSITION)
        .cloned()
        .unwrap_or_else(|| attachment_disposition(&target_url));

    // Relay the body stream directly; no intermediate buffering.
    Ok((
        status,
        [
            (CONTENT_TYPE, content_type),
            (CONTENT_DISPOSITION, content_disposition),
        ],
        Body::from_stream(upstream.bytes_stream()),
    )
        .into_response())
}

/// Resolve the target URL from the query parameters.
/// `origin` takes precedence over `id`.
fn resolve_target(params: &ProxyParams, file_host_url: &str) -> Option<String> {
    if let Some(origin) = params.origin.as_deref().filter(|s| !s.is_empty()) {
        return Some(origin.to_string());
    }
    params
        .id
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|id| format!("{}/api/file/{}?download", file_host_url, id))
}

/// A host is allowed if it equals an allow-list entry or is a
/// dot-suffixed subdomain of one.
fn host_allowed(host: &str, allowed_hosts: &[String]) -> bool {
    allowed_hosts
        .iter()
        .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
}

/// Default Content-Disposition: attach under the last path segment of
/// the target URL.
fn attachment_disposition(url: &Url) -> HeaderValue {
    let filename = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");
    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
