//! AutoKube AI Backend: a mock Kubernetes diagnosis API.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from an optional TOML file, initializes tracing,
//! assembles the Axum router, and serves HTTP until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autokube_backend::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use autokube_backend::routes::create_router;
use autokube_backend::shutdown;
use autokube_backend::state::AppState;

/// AutoKube AI Backend: mock diagnosis API for Kubernetes issues
#[derive(Parser, Debug)]
#[command(name = "autokube-backend", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "autokube_backend=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; the file is optional and missing sections fall
    // back to compiled-in defaults
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );
    tracing::warn!(
        "CORS allows any origin with credentials; development configuration, do not expose to the open internet"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .expect("Invalid http.host or http.port in config");
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    Ok(())
}

/// Installs the global tracing subscriber with the given filter, emitting
/// either human-readable text or JSON lines.
fn init_tracing(filter: &str, format: &str) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
