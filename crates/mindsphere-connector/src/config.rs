//! Client configuration
//!
//! `region` and `domain` compose the API gateway base URL; `timeout_ms`
//! bounds every outbound call including token acquisition. The configuration
//! is consumed at connector construction and never consulted again, so the
//! transport cannot drift from it at runtime.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default platform region
pub const DEFAULT_REGION: &str = "eu1";

/// Default platform domain
pub const DEFAULT_DOMAIN: &str = "mindsphere.io";

/// Default per-call timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 100_000;

/// Connector configuration. Immutable after construction.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfiguration {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Optional HTTP(S) proxy URL for all outbound calls
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self {
            region: default_region(),
            domain: default_domain(),
            proxy: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfiguration {
    /// Check the configuration before building a transport from it.
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(Error::Config("region must not be blank".into()));
        }
        if self.domain.trim().is_empty() {
            return Err(Error::Config("domain must not be blank".into()));
        }
        if self.timeout_ms == 0 {
            return Err(Error::Config("timeout_ms must be greater than 0".into()));
        }
        if let Some(proxy) = &self.proxy {
            if !proxy.starts_with("http://") && !proxy.starts_with("https://") {
                return Err(Error::Config(format!(
                    "proxy must start with http:// or https://, got: {proxy}"
                )));
            }
        }
        Ok(())
    }

    /// API gateway base URL: `https://gateway.{region}.{domain}`.
    pub fn base_url(&self) -> String {
        format!("https://gateway.{}.{}", self.region, self.domain)
    }

    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_region() -> String {
    DEFAULT_REGION.to_owned()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_owned()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compose_platform_gateway() {
        let config = ClientConfiguration::default();
        assert_eq!(config.region, "eu1");
        assert_eq!(config.domain, "mindsphere.io");
        assert_eq!(config.timeout_ms, 100_000);
        assert!(config.proxy.is_none());
        assert_eq!(config.base_url(), "https://gateway.eu1.mindsphere.io");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_region_and_domain_compose_base_url() {
        let config = ClientConfiguration {
            region: "cn1".into(),
            domain: "mindsphere.cn".into(),
            ..ClientConfiguration::default()
        };
        assert_eq!(config.base_url(), "https://gateway.cn1.mindsphere.cn");
    }

    #[test]
    fn deserializes_with_field_defaults() {
        let config: ClientConfiguration =
            serde_json::from_str(r#"{"timeout_ms": 5000}"#).unwrap();
        assert_eq!(config.region, "eu1");
        assert_eq!(config.domain, "mindsphere.io");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn blank_region_rejected() {
        let config = ClientConfiguration {
            region: "  ".into(),
            ..ClientConfiguration::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = ClientConfiguration {
            timeout_ms: 0,
            ..ClientConfiguration::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn proxy_without_scheme_rejected() {
        let config = ClientConfiguration {
            proxy: Some("proxy.internal:3128".into()),
            ..ClientConfiguration::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("proxy"), "got: {err}");
    }

    #[test]
    fn proxy_with_scheme_accepted() {
        let config = ClientConfiguration {
            proxy: Some("http://proxy.internal:3128".into()),
            ..ClientConfiguration::default()
        };
        assert!(config.validate().is_ok());
    }
}
