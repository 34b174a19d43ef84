//! Shared setup for integration tests: an in-memory SQLite database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, TimeZone, Utc};

use account_owner_lib::api::{create_router, AppState};
use account_owner_lib::config::AccountOwnerConfig;
use account_owner_lib::infra::Database;
use account_owner_lib::repository::Repositories;
use common::DatabaseConfig;

/// In-memory SQLite lives as long as its single pooled connection.
fn sqlite_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    }
}

/// Migrated, empty database
pub async fn setup_database() -> Database {
    Database::connect(&sqlite_config())
        .await
        .expect("Failed to create test database")
}

/// Database with no tables, so every query fails
pub async fn setup_unmigrated_database() -> Database {
    Database::connect_without_migrations(&sqlite_config())
        .await
        .expect("Failed to create test database")
}

pub fn repositories(db: &Database) -> Repositories {
    Repositories::new(db.get_connection())
}

pub fn router(db: Database) -> Router {
    let config = AccountOwnerConfig {
        database: sqlite_config(),
        ..AccountOwnerConfig::default()
    };
    create_router(AppState::new(Arc::new(db), config))
}

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}
