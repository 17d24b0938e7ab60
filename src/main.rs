// src/main.rs
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod app;
mod assessments;
mod auth;
mod common;
mod logging_middleware;
mod market;
mod personality;
mod profile;
mod roadmap;
mod services;
mod storage;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::config::{log_config_summary, AppConfig};
use common::AppState;
use services::{GeminiService, TextGenerator};
use storage::{DocumentStore, SqliteStore};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();
    log_config_summary(&config);

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool).await?;

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let store: Arc<dyn DocumentStore> = Arc::new(SqliteStore::new(pool));
    info!("SqliteStore initialized");

    let generator: Option<Arc<dyn TextGenerator>> = if config.gemini.is_configured() {
        let service = GeminiService::new(config.gemini.clone());
        info!("GeminiService initialized");
        Some(Arc::new(service))
    } else {
        None
    };

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState {
        store,
        jwt_secret: config.jwt_secret.clone(),
        jwt_ttl_hours: config.jwt_ttl_hours,
        generator,
    };

    let shared = Arc::new(RwLock::new(app_state));
    let app = app::build_app(shared, &config.cors_origins);

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
