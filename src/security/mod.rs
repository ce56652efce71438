//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → gate.rs (resolve caller IP, classify, ASN allow-list check)
//!     → Pass to route handlers
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any gate check failure
//! - One opaque rejection message for every deny path
//! - origin.rs classification operates on the raw IP string

pub mod gate;
pub mod origin;

pub use gate::access_gate;
pub use origin::is_private_ip;
