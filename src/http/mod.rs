//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, timeout)
//!     → security::gate (caller origin check)
//!     → handlers/ (greeting, file proxy, rate-limit status)
//!     → error.rs (failure → JSON error response)
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use server::HttpServer;
