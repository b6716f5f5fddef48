use tokio::signal;
use tracing::info;

use loglevel_service::{build_router, config::Config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    logging::init(&config)?;

    let addr = config.addr();
    info!(log_format = %config.log_format, "Listening on http://{}", addr);
    info!("Try: GET /info, /error, /critical, /exception, /health");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
