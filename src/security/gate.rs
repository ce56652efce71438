//! Access gate middleware.
//!
//! Runs before every route handler. Private callers are admitted
//! directly; public callers must resolve to an approved network
//! operator via the geolocation lookup. Every deny path returns the
//! same opaque 403 so the gating mechanism is not revealed.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::server::AppState;
use crate::security::origin::is_private_ip;

/// Fixed rejection message for every deny path.
pub const REGION_UNAVAILABLE: &str =
    "We’re not live in your region yet, but stay tuned for future availability.";

pub async fn access_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // Passthrough mode for deployments that gate upstream.
    if !state.config.access.enabled {
        return next.run(req).await;
    }

    let Some(ip) = client_ip(&req) else {
        tracing::warn!("Caller IP unavailable, rejecting");
        return deny();
    };

    // Private callers skip the lookup entirely (local/internal testing).
    if is_private_ip(&ip) {
        return next.run(req).await;
    }

    match state.geo.asn(&ip).await {
        Ok(Some(asn)) if state.config.access.allowed_asns.contains(&asn) => {
            tracing::debug!(ip = %ip, asn = %asn, "Caller network approved");
            next.run(req).await
        }
        Ok(asn) => {
            tracing::warn!(ip = %ip, asn = ?asn, "Caller network not on allow-list");
            deny()
        }
        Err(error) => {
            // Fail closed: a broken lookup rejects the caller.
            tracing::warn!(ip = %ip, error = %error, "Geo lookup failed");
            deny()
        }
    }
}

fn deny() -> Response {
    (StatusCode::FORBIDDEN, REGION_UNAVAILABLE).into_response()
}

/// Resolve the caller IP from the request.
///
/// Platform-supplied forwarding headers win over the socket peer
/// address, since the gateway normally sits behind an edge load
/// balancer. Returns None when no source is available.
fn client_ip(req: &Request<Body>) -> Option<String> {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        let first = forwarded.split(',').next().map(str::trim).unwrap_or("");
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    if let Some(real_ip) = req.headers().get("x-real-ip").and_then(|v| v.to_str().ok()) {
        if !real_ip.is_empty() {
            return Some(real_ip.to_string());
        }
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}
