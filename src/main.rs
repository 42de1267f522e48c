mod api_doc;
mod config;
mod error;
mod fatal;
mod handlers;
mod ids;
mod models;
mod routes;
mod state;
mod store;

use std::future::IntoFuture;

use anyhow::Context;
use config::Config;
use state::AppState;
use store::TodoStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values from .env feed the clap env fallbacks
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("todo-backend starting");

    let config = Config::from_args();
    config.log_startup();

    let store = TodoStore::open(config.todos_path())
        .with_context(|| format!("Failed to open todo file {}", config.todos_path().display()))?;

    let (fatal, mut fatal_rx) = fatal::channel();
    let state = AppState::new(store, fatal);
    let app = routes::create_router(state.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    let result = tokio::select! {
        served = axum::serve(listener, app).into_future() => {
            served.context("Server error")
        }
        Some(err) = fatal_rx.recv() => {
            Err(err.context("Storage failure, shutting down"))
        }
    };

    if let Err(e) = state.store.close().await {
        tracing::error!("Failed to close todo file: {}", e);
    }
    result
}
