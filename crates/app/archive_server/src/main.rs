//! Chat Archive API server binary.
//!
//! Serves `/ingest`, `/summarise` and `/chat` until Ctrl-C.

use archive_api::config::ApiConfig;
use clap::Parser;
use tracing::info;

const DEFAULT_PORT: &str = "8787";

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "archive_server", about = "Chat Archive API server", version)]
struct Args {
    /// Host to listen on. Replaces the host part of `BIND_ADDR`.
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on. Replaces the port part of `BIND_ADDR`.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Largest accepted request body in bytes. Overrides `MAX_BODY_BYTES`.
    #[arg(long)]
    max_body_bytes: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,archive_api=debug,archive_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let config = apply_args(&args, ApiConfig::from_env());

    info!(
        version = archive_core::version(),
        bind_addr = %config.bind_addr,
        max_body_bytes = config.max_body_bytes,
        "starting archive_server"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let app = archive_api::router(archive_api::AppState { config });

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("archive_server stopped");
    Ok(())
}

/// Layers command-line flags over the environment configuration.
fn apply_args(args: &Args, mut config: ApiConfig) -> ApiConfig {
    if args.host.is_some() || args.port.is_some() {
        let (base_host, base_port) = config
            .bind_addr
            .rsplit_once(':')
            .unwrap_or((config.bind_addr.as_str(), DEFAULT_PORT));
        let host = args.host.as_deref().unwrap_or(base_host);
        let port = args
            .port
            .map(|p| p.to_string())
            .unwrap_or_else(|| base_port.to_string());
        let bind_addr = format!("{host}:{port}");
        config.bind_addr = bind_addr;
    }
    if let Some(limit) = args.max_body_bytes {
        config.max_body_bytes = limit;
    }
    config
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {e}");
        // Without a signal handler, keep serving.
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
