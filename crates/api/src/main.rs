use std::fmt::Display;
use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quicknote_api::config::ServerConfig;
use quicknote_api::router::build_app_router;
use quicknote_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "quicknote_api=debug,quicknote_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| fatal("Invalid configuration", e));
    tracing::info!(
        host = %config.host,
        port = config.port,
        database_url = %config.database_url,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = quicknote_db::create_pool(&config.database_url)
        .await
        .unwrap_or_else(|e| fatal("Failed to connect to database", e));
    tracing::info!("Connected to SQLite database");

    quicknote_db::health_check(&pool)
        .await
        .unwrap_or_else(|e| fatal("Database health check failed", e));

    // The table must exist before the listener is bound.
    quicknote_db::init_schema(&pool)
        .await
        .unwrap_or_else(|e| fatal("Failed to create notes table", e));

    // --- Router ---
    let app = build_app_router(AppState { pool: pool.clone() });

    // --- Start server ---
    let host = config
        .host
        .parse()
        .unwrap_or_else(|e| fatal("Invalid HOST address", e));
    let addr = SocketAddr::new(host, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| fatal("Failed to bind to address", e));
    tracing::info!(%addr, "Server running");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        fatal("Server error", e);
    }

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Log a startup failure and exit. The server never serves traffic against
/// an unready store.
fn fatal(context: &str, err: impl Display) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1);
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
