// SPDX-FileCopyrightText: 2026 ZenJournal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `zenjournal serve` command implementation.
//!
//! Wires SQLite storage, the Gemini analyzer, the session manager, and
//! the entry controller into the HTTP gateway, then serves until a
//! shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use zenjournal_auth::SessionManager;
use zenjournal_config::model::ZenConfig;
use zenjournal_core::JournalError;
use zenjournal_entries::EntryController;
use zenjournal_gateway::server::{ServerConfig, start_server};
use zenjournal_gateway::AppState;
use zenjournal_gemini::GeminiAnalyzer;
use zenjournal_storage::SqliteStore;

/// How often abandoned sessions are swept out of storage. Expired
/// tokens are already rejected on sight, so hourly is plenty.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Runs the `zenjournal serve` command.
pub async fn run_serve(config: ZenConfig) -> Result<(), JournalError> {
    init_tracing(&config.app.log_level);

    info!("starting zenjournal serve");

    let store = Arc::new(SqliteStore::new(config.storage.clone()));
    store.initialize().await?;

    let analyzer = Arc::new(GeminiAnalyzer::from_config(&config.gemini)?);
    let sessions = Arc::new(SessionManager::new(store.clone(), config.auth.clone()));
    let controller = Arc::new(EntryController::new(store.clone(), analyzer));

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let state = AppState::new(sessions, controller);

    let sweeper = tokio::spawn(sweep_expired_sessions(store.clone()));

    start_server(&server_config, state, shutdown_signal()).await?;

    sweeper.abort();
    store.close().await?;
    info!("zenjournal serve shutdown complete");
    Ok(())
}

/// Periodically purges expired sessions so abandoned tokens do not pile
/// up in storage. Failures are logged and retried on the next tick.
async fn sweep_expired_sessions(store: Arc<SqliteStore>) {
    let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        if let Err(e) = store.purge_expired_sessions().await {
            warn!(error = %e, "expired session sweep failed");
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
        return;
    }
    info!("shutdown signal received");
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("zenjournal={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
