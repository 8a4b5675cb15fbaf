//! Outbound forwarding client.
//!
//! Wraps a pooled `reqwest` client with a bounded timeout. There is no retry
//! of the forwarding call: a transport failure is reported straight back to
//! the original caller as a 502.

use reqwest::Client;

use crate::config::Config;
use crate::error::RelayResult;

/// Outcome of a completed forwarding exchange.
///
/// A completed exchange counts as success regardless of the downstream
/// status code; the status is carried for logging only.
#[derive(Debug, Clone)]
pub struct ForwardOutcome {
    /// The URL the callback was relayed to.
    pub target_url: String,
    /// HTTP status returned by the downstream service.
    pub status: u16,
}

/// Relays callback requests to the downstream service.
#[derive(Clone)]
pub struct CallbackForwarder {
    client: Client,
    container_host: String,
}

impl CallbackForwarder {
    /// Create a forwarder from the relay configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.forward_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { client, container_host: config.container_host.clone() })
    }

    /// Target URL for a given destination port.
    #[must_use]
    pub fn target_url(&self, port: u16) -> String {
        format!("http://{}:{}/oauth/callback", self.container_host, port)
    }

    /// Forward a callback to the downstream service, propagating every
    /// original query pair unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Upstream` on connection refusal, timeout, or DNS
    /// failure.
    pub async fn forward(
        &self,
        port: u16,
        query_pairs: &[(String, String)],
    ) -> RelayResult<ForwardOutcome> {
        let target_url = self.target_url(port);

        let response = self.client.get(&target_url).query(query_pairs).send().await?;
        let status = response.status().as_u16();

        // Drain the body so the connection can return to the pool; the
        // downstream response content is not relayed to the caller.
        let _ = response.text().await;

        Ok(ForwardOutcome { target_url, status })
    }
}

impl std::fmt::Debug for CallbackForwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackForwarder")
            .field("container_host", &self.container_host)
            .finish_non_exhaustive()
    }
}
