//! Edge HTTP Gateway
//!
//! A small edge gateway built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 EDGE GATEWAY                 │
//!                        │                                              │
//!   Client Request       │  ┌──────────┐    ┌──────────────┐           │
//!   ────────────────────▶│  │  access  │───▶│    route     │           │
//!                        │  │   gate   │    │   handlers   │           │
//!                        │  └────┬─────┘    └──────┬───────┘           │
//!                        │       │                 │                    │
//!                        │       ▼                 ▼                    │
//!                        │  ┌──────────┐    ┌──────────────┐           │
//!                        │  │   geo    │    │  file host   │◀──────────┼──── Upstream
//!                        │  │  lookup  │    │   upstream   │           │     Servers
//!                        │  └──────────┘    └──────────────┘           │
//!                        │                                              │
//!                        │  ┌────────────────────────────────────────┐ │
//!                        │  │         Cross-Cutting Concerns         │ │
//!                        │  │  ┌─────────┐ ┌──────────┐ ┌──────────┐ │ │
//!                        │  │  │ config  │ │observa-  │ │ security │ │ │
//!                        │  │  │         │ │ bility   │ │          │ │ │
//!                        │  │  └─────────┘ └──────────┘ └──────────┘ │ │
//!                        │  └────────────────────────────────────────┘ │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! Every inbound request passes through the access gate before any
//! handler runs. The gate admits private callers directly and checks
//! public callers against an ASN allow-list via a geolocation lookup,
//! failing closed on any error. Approved requests reach one of three
//! handlers: a greeting, a streaming file proxy restricted to
//! allow-listed hosting domains, and a transfer-limit status report.

// Core subsystems
pub mod config;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod observability;
pub mod security;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
