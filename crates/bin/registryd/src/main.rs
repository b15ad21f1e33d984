//! # registryd — central registry daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Open the `SQLite` pool and run migrations, or fall back to the in-memory store
//! - Construct the central service, injecting the repository via its port trait
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use registry_adapter_http_axum::state::AppState;
use registry_adapter_storage_memory::InMemoryCentralRepository;
use registry_adapter_storage_sqlite_sqlx::{Database, SqliteCentralRepository};
use registry_app::ports::CentralRepository;
use registry_app::services::central_service::CentralService;
use tracing_subscriber::EnvFilter;

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.database.backend {
        Backend::Sqlite => {
            let db = Database::connect(config.database_url()).await?;
            serve(&config, SqliteCentralRepository::new(db.into_pool())).await
        }
        Backend::Memory => serve(&config, InMemoryCentralRepository::new()).await,
    }
}

async fn serve<R>(config: &Config, repo: R) -> anyhow::Result<()>
where
    R: CentralRepository + Send + Sync + 'static,
{
    let state = AppState::new(CentralService::new(repo));
    let app = registry_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        address = %bind_addr,
        backend = %config.database.backend,
        "registryd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("registryd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
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
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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

    tracing::info!("shutdown signal received");
}
