//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the edge gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Access gate settings (ASN allow-list, geo lookup).
    pub access: AccessConfig,

    /// File proxy settings (allowed hosting domains, upstream URLs).
    pub file_proxy: FileProxyConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
///
/// TLS termination is left to the hosting platform; the gateway only
/// speaks plain HTTP on its bind address.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Access gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Enable the gate. If false, all requests pass through.
    pub enabled: bool,

    /// Base URL of the geolocation lookup service. The gate queries
    /// `<base>/<ip>/json/` and reads the `asn` field of the result.
    pub geo_lookup_url: String,

    /// Approved network operators. Callers whose lookup resolves to
    /// any other ASN are rejected.
    pub allowed_asns: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            geo_lookup_url: "https://ipapi.co".to_string(),
            // Cloudflare + Rogers
            allowed_asns: vec!["AS13335".to_string(), "AS812".to_string()],
        }
    }
}

/// File proxy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FileProxyConfig {
    /// Hosting domains the proxy may fetch from. A target host must
    /// equal one of these or be a dot-suffixed subdomain of one.
    pub allowed_hosts: Vec<String>,

    /// Base URL used to expand `id` query parameters into download
    /// URLs (`<base>/api/file/<id>?download`).
    pub file_host_url: String,

    /// Upstream endpoint reporting transfer-limit usage.
    pub rate_limit_url: String,
}

impl Default for FileProxyConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: vec![
                "pixeldrain.com".to_string(),
                "pixeldra.in".to_string(),
                "pixeldrain.net".to_string(),
                "pixeldrain.dev".to_string(),
            ],
            file_host_url: "https://pixeldrain.com".to_string(),
            rate_limit_url: "https://pixeldrain.com/api/misc/rate_limits".to_string(),
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout for outbound fetches in seconds.
    pub connect_secs: u64,

    /// Request timeout (time until response headers) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
