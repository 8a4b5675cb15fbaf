//! OAuth Callback Relay - Entry Point
//!
//! Runs on the host machine and forwards OAuth callbacks into the container.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use oauth_relay::config::{Config, defaults};
use oauth_relay::server::RelayServer;

#[derive(Parser, Debug)]
#[command(name = "oauth-relay")]
#[command(about = "OAuth callback relay for containers")]
#[command(version)]
struct Cli {
    /// Port to listen on for OAuth callbacks
    #[arg(long, default_value_t = defaults::LISTEN_PORT, env = "PORT")]
    port: u16,

    /// Container host to forward callbacks to
    #[arg(long, default_value = defaults::CONTAINER_HOST)]
    container_host: String,

    /// Default container port used when no callback port is resolved
    #[arg(long, default_value_t = defaults::CONTAINER_PORT)]
    container_port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cli.port,
        container_host = %cli.container_host,
        container_port = cli.container_port,
        "Starting OAuth callback relay"
    );

    let config = Config::new(cli.port, cli.container_host, cli.container_port);
    RelayServer::new(config).run().await
}
