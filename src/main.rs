//! CityLink zone service.
//!
//! Serves postcode → delivery zone lookups over HTTP.
//!
//! ```text
//!     Client ──▶ listener ──▶ http (request id, trace, timeout)
//!                                │
//!                                ▼
//!                         ZoneClassifier ◀── ZoneTable (built-in or TOML file,
//!                                │                     loaded once at startup)
//!     Client ◀── JSON ◀──────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use citylink_zones::config::{load_config, resolve_zone_table, ServiceConfig};
use citylink_zones::lifecycle::{wait_for_signal, Shutdown};
use citylink_zones::observability::{logging, metrics};
use citylink_zones::{HttpServer, ZoneClassifier};

#[derive(Parser)]
#[command(name = "zone-server")]
#[command(about = "HTTP service classifying postcodes into CityLink delivery zones", long_about = None)]
struct Args {
    /// Service configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);
    tracing::info!("zone-server v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_batch_size = config.listener.max_batch_size,
        request_timeout_secs = config.timeouts.request_secs,
        table = config.table.path.as_deref().unwrap_or("built-in"),
        "Configuration loaded"
    );

    let table = resolve_zone_table(&config)?;
    let classifier = ZoneClassifier::new(table);

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, classifier);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    wait_for_signal().await;
    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
