//! Outbound HTTP clients.
//!
//! # Data Flow
//! ```text
//! Access gate ──▶ geo.rs   (ASN lookup per public caller)
//! /api handler ──▶ files.rs (streaming file fetch)
//! /limit handler ─▶ files.rs (transfer-limit usage fetch)
//! ```
//!
//! # Design Decisions
//! - One shared reqwest client per concern, cloned cheaply via Arc
//! - Redirects followed automatically on file fetches
//! - No retries; a failed call is terminal for its request

pub mod files;
pub mod geo;

pub use files::UpstreamClient;
pub use geo::GeoClient;
