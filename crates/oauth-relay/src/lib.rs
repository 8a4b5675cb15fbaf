//! OAuth Callback Relay
//!
//! Forwards OAuth authorization callbacks received on the host to a service
//! listening inside a container (or any otherwise unreachable endpoint).
//! Single-hop, stateless request relay with session-port bookkeeping and a
//! minimal health/registration API.
//!
//! # Features
//!
//! - **Callback forwarding**: relays `/oauth/callback` with all query
//!   parameters unchanged, bounded by a 10 second timeout
//! - **Session registration**: `/oauth/register` maps session ids to
//!   destination ports
//! - **Async-first**: built on Tokio and axum
//!
//! # Example
//!
//! ```no_run
//! use oauth_relay::{config::Config, server::RelayServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     RelayServer::new(config).run().await
//! }
//! ```

pub mod config;
pub mod error;
pub mod forwarder;
pub mod pages;
pub mod registry;
pub mod server;

pub use config::Config;
pub use error::{RelayError, RelayResult};
pub use forwarder::CallbackForwarder;
pub use registry::SessionRegistry;
