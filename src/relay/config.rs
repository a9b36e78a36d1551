//! Relay server configuration

use super::error::{RelayError, Result};
use std::net::SocketAddr;
use std::time::Duration;

/// Default listen address for `slovo serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Configuration for the result relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Webhook that receives forwarded results; forwarding is skipped when unset
    pub webhook_url: Option<String>,
    /// Timeout for the outgoing webhook request
    pub request_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            webhook_url: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl RelayConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Parse and set the bind address from a string.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Config` if the address does not parse.
    pub fn with_bind_addr_str(mut self, addr: &str) -> Result<Self> {
        self.bind_addr = addr
            .parse()
            .map_err(|e| RelayError::config(format!("invalid bind address {addr}: {e}")))?;
        Ok(self)
    }

    /// Set the webhook URL; blank strings count as unset.
    #[must_use]
    pub fn with_webhook_url(mut self, url: Option<String>) -> Self {
        self.webhook_url = url.filter(|u| !u.trim().is_empty());
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_localhost() {
        let config = RelayConfig::default();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn bind_addr_from_str() {
        let config = RelayConfig::new().with_bind_addr_str("0.0.0.0:8080").unwrap();
        assert_eq!(config.bind_addr.port(), 8080);

        assert!(RelayConfig::new().with_bind_addr_str("nope").is_err());
    }

    #[test]
    fn blank_webhook_is_unset() {
        let config = RelayConfig::new().with_webhook_url(Some("  ".to_string()));
        assert!(config.webhook_url.is_none());

        let config = RelayConfig::new().with_webhook_url(Some("http://hook".to_string()));
        assert_eq!(config.webhook_url.as_deref(), Some("http://hook"));
    }
}
