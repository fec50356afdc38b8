use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::{Adapters, Repositories, ServerState};
use service::{
    cache::MokaCacheStore,
    exports::{channel::spawn_log_drain, QueueChannel},
    runtime,
    storage::LocalStorage,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &configs::ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {}:{}: {e}", cfg.host, cfg.port)))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = configs::AppConfig::load_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    runtime::ensure_env(&cfg.uploads.dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let (channel, queue) = QueueChannel::new(cfg.export.queue_capacity);
    spawn_log_drain(queue);

    let adapters = Adapters {
        cache: Arc::new(MokaCacheStore::from_config(&cfg.cache)),
        channel: Arc::new(channel),
        storage: Arc::new(LocalStorage::new(&cfg.uploads.dir)),
    };
    let state = ServerState::build(Repositories::seaorm(db), adapters, &cfg);

    let app: Router = routes::build_router(state, build_cors(), &cfg.uploads.dir);

    // Bind and serve
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
