//! Anime Service Library
//!
//! This crate provides the anime catalog REST API: HTTP handlers delegate to
//! the service layer, which delegates to a SeaORM-backed repository.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sea_orm::DbErr;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::AnimeServiceConfig;
use crate::infra::Database;
use crate::repository::AnimeStore;
use crate::service::AnimeManager;

/// Run the HTTP server, overriding the configured host and port.
pub async fn run(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AnimeServiceConfig::from_env();
    config.host = host.to_string();
    config.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AnimeServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    apply_migration_action(&db, action).await?;
    Ok(())
}

/// Apply one migration action to an open database.
pub async fn apply_migration_action(db: &Database, action: MigrateAction) -> Result<(), DbErr> {
    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wire repository, service and router on top of a connected database.
pub fn build_app(database: Database) -> Router {
    let anime_repo = Arc::new(AnimeStore::new(database.get_connection()));
    let anime_service = Arc::new(AnimeManager::new(anime_repo));

    let state = AppState::new(anime_service, Arc::new(database));
    create_router(state)
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: AnimeServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    let app = build_app(db);

    // Build address
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Anime service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
