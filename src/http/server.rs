//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, access gate)
//! - Bind server to listener
//! - Graceful shutdown on Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::security::gate::access_gate;
use crate::upstream::{GeoClient, UpstreamClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub geo: Arc<GeoClient>,
    pub upstream: Arc<UpstreamClient>,
}

/// HTTP server for the edge gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

/// Build the gateway application from a configuration.
///
/// Separate from [`HttpServer`] so tests can drive the router
/// in-process without binding a listener.
pub fn app(config: GatewayConfig) -> Router {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
        .build()
        .expect("failed to build HTTP client");

    let geo = Arc::new(GeoClient::new(
        client.clone(),
        config.access.geo_lookup_url.clone(),
    ));
    let upstream = Arc::new(UpstreamClient::new(
        client,
        config.file_proxy.rate_limit_url.clone(),
    ));

    let request_timeout = Duration::from_secs(config.timeouts.request_secs);
    let state = AppState {
        config: Arc::new(config),
        geo,
        upstream,
    };

    // Layers run top-down per request: request ID first, then tracing,
    // then the access gate ahead of every handler.
    Router::new()
        .route("/", get(handlers::greeting))
        .route("/api", get(handlers::proxy::proxy_file))
        .route("/limit", get(handlers::limit::rate_limit_status))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, access_gate))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let router = app(config.clone());
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        // Serve with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
