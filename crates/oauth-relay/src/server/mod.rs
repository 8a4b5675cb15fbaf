//! Relay server: binds the listener and serves the router until interrupted.

pub mod routes;

use std::net::SocketAddr;

use crate::config::Config;

/// The OAuth callback relay server.
#[derive(Debug)]
pub struct RelayServer {
    config: Config,
}

impl RelayServer {
    /// Create a new relay server.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the server until terminated.
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot bind or the server fails.
    pub async fn run(self) -> anyhow::Result<()> {
        let listen_port = self.config.listen_port;
        let target = format!("{}:{}", self.config.container_host, self.config.container_port);
        let callback_url = self.config.callback_base_url();

        let router = routes::create_router(self.config)?;
        let addr = SocketAddr::from(([0, 0, 0, 0], listen_port));

        tracing::info!("Starting OAuth relay on port {}", listen_port);
        tracing::info!("Forwarding to container at {}", target);
        tracing::info!("OAuth callback URL: {}", callback_url);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("Relay shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
