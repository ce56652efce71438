//! Route handlers.
//!
//! Three routes sit behind the access gate: the root greeting, the
//! streaming file proxy, and the transfer-limit status report.

pub mod limit;
pub mod proxy;

/// `GET /` — fixed greeting.
pub async fn greeting() -> &'static str {
    "Hello Hono + Netlify Edge!"
}
