//! Account Owner Service Library
//!
//! Owners and their accounts served over HTTP, with persistence behind a
//! repository wrapper that commits each request's changes as one unit of work.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::AccountOwnerConfig;
use crate::infra::Database;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: AccountOwnerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let database = Database::connect(&config.database).await?;

    let addr = config.server.addr();
    let state = AppState::new(Arc::new(database), config);
    let app = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Account owner service listening on {}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AccountOwnerConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

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
