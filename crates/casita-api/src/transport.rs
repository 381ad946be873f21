// Transport configuration for building reqwest::Client instances.
//
// The Casita server is plain local HTTP, so there is no TLS or cookie
// handling here -- just the per-request timeout and a user agent.

use std::time::Duration;

use crate::error::Error;

/// Default per-request timeout. One slow call aborts the whole command;
/// there are no retries.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("casita-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))
    }
}
