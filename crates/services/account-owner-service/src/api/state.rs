//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::AccountOwnerConfig;
use crate::infra::Database;
use crate::repository::Repositories;

/// Application state shared across handlers.
///
/// Holds the connection pool only; every request builds its own
/// `Repositories` unit of work from it.
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<Database>,
    pub config: AccountOwnerConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(database: Arc<Database>, config: AccountOwnerConfig) -> Self {
        Self { database, config }
    }

    /// Start a unit of work for one request.
    pub fn repositories(&self) -> Repositories {
        Repositories::new(self.database.get_connection())
    }
}
