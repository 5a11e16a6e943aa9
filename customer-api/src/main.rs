//! Customer API entry point
//!
//! Loads the persisted collection and serves it over HTTP until Ctrl+C.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shared::{ProcessId, logging, process_info};

use customer_api::{CustomerServer, JsonFileStore, ServerConfig};
use customer_api::config::{DEFAULT_DATA_FILE, DEFAULT_HOST, DEFAULT_PORT};

/// Command line arguments, each overridable from the environment
#[derive(Parser, Debug)]
#[command(name = "customer-api")]
#[command(about = "HTTP service for the customer collection")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// JSON file holding the customer collection
    #[arg(long, env = "CUSTOMERS_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        ServerConfig {
            host: args.host,
            port: args.port,
            data_file: args.data_file,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up PORT and friends from a local .env if there is one
    let _ = dotenv::dotenv();
    let args = Args::parse();

    ProcessId::init_customer_api();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = ServerConfig::from(args);
    let bind_address = config.socket_addr().await?;

    logging::log_startup(
        ProcessId::current(),
        &format!("customer API on {} with data file {}", bind_address, config.data_file.display()),
    );

    let persistence = JsonFileStore::new(config.data_file.clone());
    let server = CustomerServer::load(persistence)
        .await
        .with_context(|| format!("loading customers from {}", config.data_file.display()))?;

    process_info!(
        ProcessId::current(),
        "📊 Serving {} customers",
        server.state().customer_count().await
    );

    server.run(bind_address).await?;

    logging::log_success(ProcessId::current(), "Customer API stopped gracefully");
    Ok(())
}
