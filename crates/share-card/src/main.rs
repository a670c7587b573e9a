//! Share Card - HTTP server for Open Graph share pages.
//!
//! Serves crawler-friendly preview pages for shared 3D models and redirects
//! browsers to the client-side viewer.

use axum::http::Request;
use clap::Parser;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use share_card::{AppState, Config, router};

/// Share Card - Open Graph share pages for 3D models.
#[derive(Parser, Debug)]
#[command(name = "share-card")]
#[command(about = "Open Graph share pages that redirect to the model viewer", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    let state = AppState::new(config);

    let app = router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting share-card server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down gracefully");
    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    let result = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut sigterm) => tokio::select! {
            result = signal::ctrl_c() => result,
            _ = sigterm.recv() => Ok(()),
        },
        Err(err) => {
            tracing::warn!(error = %err, "SIGTERM handler unavailable, waiting for Ctrl-C");
            signal::ctrl_c().await
        }
    };
    #[cfg(not(unix))]
    let result = signal::ctrl_c().await;

    if let Err(err) = result {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
