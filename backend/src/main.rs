//! Backend entry-point: opens the store, seeds an empty catalog, and serves
//! the REST API.

use std::net::SocketAddr;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::server::{ServerConfig, run};

/// Inventory catalog REST service.
#[derive(Debug, Parser)]
#[command(name = "backend")]
struct Cli {
    /// Socket address to bind.
    #[arg(long, env = "INVENTORY_BIND_ADDR", default_value = "0.0.0.0:3001")]
    bind_addr: SocketAddr,

    /// SQLite database path; created on first start.
    #[arg(long, env = "INVENTORY_DATABASE", default_value = "inventory.db")]
    database: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let cli = Cli::parse();
    let config = ServerConfig::new(cli.bind_addr, cli.database);
    run(&config)?.await
}
