//! Parley REST API entry point.
//!
//! Binary name: `parley`
//!
//! Parses CLI arguments, loads configuration from the data directory,
//! initializes database and services, then starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parley_api::http;
use parley_api::state::AppState;
use parley_infra::config::{load_server_config, resolve_data_dir};

/// Authenticated chat transcript server.
#[derive(Debug, Parser)]
#[command(name = "parley", version, about)]
struct Cli {
    /// Address to bind (overrides config.toml).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config.toml).
    #[arg(long, short)]
    port: Option<u16>,

    /// Data directory for the database, signing key, and config.toml.
    #[arg(long, env = "PARLEY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,parley=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(resolve_data_dir);

    let mut config = load_server_config(&data_dir).await;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let state = AppState::init(data_dir, &config).await?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Parley API listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
