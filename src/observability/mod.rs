//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Per-request spans come from tower-http's TraceLayer
//! - Log level configurable via config and environment

pub mod logging;
