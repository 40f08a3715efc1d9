use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::CorsLayer;
use tracing::info;

use service::storage::StorageEngine;

use crate::routes::{self, ServerState};

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config.toml, falling back to defaults when the file is absent.
/// `SERVER_HOST`/`SERVER_PORT` override the file; `DATABASE_URL` and
/// `STORAGE_ROOT` are applied inside `normalize_and_validate`.
fn load_config() -> anyhow::Result<configs::AppConfig> {
    let mut cfg = configs::load_default().unwrap_or_default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;

    let storage = Arc::new(StorageEngine::from_config(&cfg.storage));
    storage.ensure_dirs().await?;
    info!(root = %storage.root().display(), "storage ready");

    let db = models::db::connect_with_config(&cfg.database).await?;
    Migrator::up(&db, None).await?;

    let state = ServerState {
        db,
        storage,
        http: reqwest::Client::new(),
    };

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting cms backend");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
