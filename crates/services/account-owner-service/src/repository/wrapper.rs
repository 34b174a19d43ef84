//! Repository wrapper - one unit of work over the owner and account stores.
//!
//! A wrapper is built per request. Its repositories are created lazily, at
//! most once each, and share the wrapper's connection handle and change set,
//! so `save()` commits mutations queued through either of them atomically.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::account_repository::{AccountRepository, AccountStore};
use super::change_set::ChangeSet;
use super::owner_repository::{OwnerRepository, OwnerStore};
use common::{AppError, AppResult};

/// Repository wrapper trait for dependency injection.
#[async_trait]
pub trait RepositoryWrapper: Send + Sync {
    /// Get the owner repository
    fn owner(&self) -> Arc<dyn OwnerRepository>;

    /// Get the account repository
    fn account(&self) -> Arc<dyn AccountRepository>;

    /// Commit every queued mutation in one transaction.
    ///
    /// All-or-nothing: on error the transaction is rolled back. The queue is
    /// empty afterwards in both cases. With nothing queued this is a no-op.
    async fn save(&self) -> AppResult<()>;
}

/// Concrete implementation of RepositoryWrapper
pub struct Repositories {
    db: DatabaseConnection,
    changes: ChangeSet,
    owner_repo: OnceCell<Arc<OwnerStore>>,
    account_repo: OnceCell<Arc<AccountStore>>,
}

impl Repositories {
    /// Create a new wrapper over a connection handle
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            changes: ChangeSet::new(),
            owner_repo: OnceCell::new(),
            account_repo: OnceCell::new(),
        }
    }

    /// Number of mutations waiting for `save()`
    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }

    fn owner_store(&self) -> &Arc<OwnerStore> {
        self.owner_repo
            .get_or_init(|| Arc::new(OwnerStore::new(self.db.clone(), self.changes.clone())))
    }

    fn account_store(&self) -> &Arc<AccountStore> {
        self.account_repo
            .get_or_init(|| Arc::new(AccountStore::new(self.db.clone(), self.changes.clone())))
    }
}

#[async_trait]
impl RepositoryWrapper for Repositories {
    fn owner(&self) -> Arc<dyn OwnerRepository> {
        self.owner_store().clone()
    }

    fn account(&self) -> Arc<dyn AccountRepository> {
        self.account_store().clone()
    }

    async fn save(&self) -> AppResult<()> {
        let pending = self.changes.take();
        if pending.is_empty() {
            tracing::debug!("Nothing to save");
            return Ok(());
        }
        let count = pending.len();

        let txn = self.db.begin().await.map_err(AppError::from)?;

        for change in pending {
            if let Err(e) = change.apply(&txn).await {
                // Rollback on error
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                tracing::warn!(changes = count, "Unit of work rolled back: {}", e);
                return Err(e);
            }
        }

        txn.commit().await.map_err(AppError::from)?;
        tracing::info!(changes = count, "Unit of work committed");
        Ok(())
    }
}
