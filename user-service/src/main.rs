use log::error;
use tracing::info;
use users_api::{config::Config, routes};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,users_api=debug,users_shared=debug".into());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(true)
        .init();

    let config = Config::from_env()?;
    let addr = config.socket_addr();

    let app = routes::create_router(&config.route_prefix);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running at http://{}", addr);
    info!(
        "Users API available at http://{}{}/api/users",
        addr, config.route_prefix
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
