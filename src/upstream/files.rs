//! File-hosting upstream client.

use serde::Deserialize;

/// Client for the file-hosting upstream: streaming downloads plus the
/// transfer-limit usage endpoint.
pub struct UpstreamClient {
    client: reqwest::Client,
    rate_limit_url: String,
}

/// Transfer-limit usage as reported by the upstream, in bytes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateLimitUsage {
    pub transfer_limit_used: f64,
    pub transfer_limit: f64,
}

impl UpstreamClient {
    pub fn new(client: reqwest::Client, rate_limit_url: String) -> Self {
        Self {
            client,
            rate_limit_url,
        }
    }

    /// Fetch a file URL, following redirects.
    ///
    /// The response is returned as-is so the caller can relay status,
    /// headers, and the body stream without buffering.
    pub async fn fetch_file(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client.get(url).send().await
    }

    /// Fetch current transfer-limit usage.
    pub async fn rate_limits(&self) -> Result<RateLimitUsage, reqwest::Error> {
        self.client
            .get(&self.rate_limit_url)
            .send()
            .await?
            .json()
            .await
    }
}
