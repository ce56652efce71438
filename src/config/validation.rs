//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid URL for {field}: '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    #[error("access gate is enabled but allowed_asns is empty")]
    EmptyAsnAllowList,

    #[error("file_proxy.allowed_hosts is empty")]
    EmptyHostAllowList,

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.access.enabled && config.access.allowed_asns.is_empty() {
        errors.push(ValidationError::EmptyAsnAllowList);
    }

    if config.file_proxy.allowed_hosts.is_empty() {
        errors.push(ValidationError::EmptyHostAllowList);
    }

    let urls = [
        ("access.geo_lookup_url", &config.access.geo_lookup_url),
        ("file_proxy.file_host_url", &config.file_proxy.file_host_url),
        ("file_proxy.rate_limit_url", &config.file_proxy.rate_limit_url),
    ];
    for (field, value) in urls {
        if Url::parse(value).is_err() {
            errors.push(ValidationError::InvalidUrl {
                field,
                value: value.clone(),
            });
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
