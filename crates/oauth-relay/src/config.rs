//! Configuration for the OAuth callback relay.

use std::time::Duration;

/// Default configuration constants.
pub mod defaults {
    use std::time::Duration;

    /// Port the relay listens on for inbound callbacks.
    pub const LISTEN_PORT: u16 = 8888;

    /// Host the container (downstream service) is reachable at.
    pub const CONTAINER_HOST: &str = "localhost";

    /// Default container port used when no port can be resolved.
    pub const CONTAINER_PORT: u16 = 8000;

    /// Timeout for the outbound forwarding call.
    pub const FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout for the outbound forwarding call.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
}

/// Relay configuration, fully initialized at construction.
///
/// Nothing here is mutated after startup; the listening port is part of the
/// config so registration responses can build the public callback URL without
/// any post-construction state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the relay listens on.
    pub listen_port: u16,

    /// Downstream host callbacks are forwarded to.
    pub container_host: String,

    /// Downstream port used when no `callback_port` or registry entry applies.
    pub container_port: u16,

    /// Timeout for the outbound forwarding request.
    pub forward_timeout: Duration,

    /// Connection timeout for the outbound forwarding request.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration from the startup parameters.
    #[must_use]
    pub fn new(listen_port: u16, container_host: impl Into<String>, container_port: u16) -> Self {
        Self {
            listen_port,
            container_host: container_host.into(),
            container_port,
            forward_timeout: defaults::FORWARD_TIMEOUT,
            connect_timeout: defaults::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock downstream server.
    #[must_use]
    pub fn for_testing(container_host: &str, container_port: u16) -> Self {
        Self {
            listen_port: defaults::LISTEN_PORT,
            container_host: container_host.to_string(),
            container_port,
            forward_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
        }
    }

    /// The relay's own public callback URL, rendered into pages and
    /// registration responses.
    #[must_use]
    pub fn callback_base_url(&self) -> String {
        format!("http://localhost:{}/oauth/callback", self.listen_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::LISTEN_PORT, defaults::CONTAINER_HOST, defaults::CONTAINER_PORT)
    }
}
