use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use callhub_routing_core::{RecordingTelephony, RoutingService};
use callhub_routing_server::{ServerConfig, create_router, init_logging};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "callhub-routing-server", version, about = "Inbound call routing service")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the log level
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if args.json_logs {
        config.logging.json = true;
    }
    config.validate()?;

    init_logging(&config.logging)?;
    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let directory = config.build_directory();
    if directory.is_empty() {
        warn!("directory is empty; every inbound call will be rejected");
    }
    info!(
        "{} published number(s), presence ttl {}s, queue limit {:?}",
        directory.len(),
        config.presence.ttl_seconds,
        config.queue.max_per_number
    );

    // No provider client is wired in yet; record outbound actions instead.
    let telephony = Arc::new(RecordingTelephony::new());
    let service = Arc::new(RoutingService::new(
        config.routing_settings(),
        Arc::new(directory),
        telephony,
    ));

    let app = create_router(service);
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
    }
    info!("Shutdown requested");
}
