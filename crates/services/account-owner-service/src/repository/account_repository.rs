//! Account repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::base::ReadRepository;
use super::change_set::{ChangeSet, PendingChange};
use super::entities::{account, AccountEntity, AccountModel};
use common::AppResult;
use domain::{Account, AccountFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
///
/// The owner reference is not checked here; the foreign key rejects
/// dangling references when the unit of work is saved.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Every account, in no particular order
    async fn find_all(&self, track_changes: bool) -> AppResult<Vec<Account>>;

    /// Accounts matching the filter
    async fn find_by_condition(&self, filter: AccountFilter, track_changes: bool) -> AppResult<Vec<Account>>;

    /// Account by identifier
    async fn find_by_id(&self, id: Uuid, track_changes: bool) -> AppResult<Option<Account>>;

    /// Queue an insert, assigning an identifier if the account has none
    fn create(&self, account: Account) -> AppResult<Uuid>;

    /// Queue a full replacement of an existing account
    fn update(&self, account: Account) -> AppResult<()>;

    /// Queue a delete
    fn delete(&self, id: Uuid);
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
    changes: ChangeSet,
}

impl AccountStore {
    /// Create new repository instance sharing the wrapper's change set
    pub fn new(db: DatabaseConnection, changes: ChangeSet) -> Self {
        Self { db, changes }
    }
}

impl ReadRepository<AccountEntity, AccountModel> for AccountStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_all(&self, track_changes: bool) -> AppResult<Vec<Account>> {
        let models = self.fetch_all(track_changes).await?;
        Ok(models.into_iter().map(Account::from).collect())
    }

    async fn find_by_condition(&self, filter: AccountFilter, track_changes: bool) -> AppResult<Vec<Account>> {
        let models = self
            .fetch_matching(account::condition(filter), track_changes)
            .await?;
        Ok(models.into_iter().map(Account::from).collect())
    }

    async fn find_by_id(&self, id: Uuid, _track_changes: bool) -> AppResult<Option<Account>> {
        let result = self.fetch_by_id(id).await?;
        Ok(result.map(Account::from))
    }

    fn create(&self, mut account: Account) -> AppResult<Uuid> {
        account.validate()?;
        let id = account.ensure_id();
        tracing::debug!(account_id = %id, owner_id = %account.owner_id, "Queued account insert");
        self.changes.push(PendingChange::InsertAccount(account));
        Ok(id)
    }

    fn update(&self, account: Account) -> AppResult<()> {
        account.validate()?;
        tracing::debug!(account_id = %account.id, "Queued account update");
        self.changes.push(PendingChange::UpdateAccount(account));
        Ok(())
    }

    fn delete(&self, id: Uuid) {
        tracing::debug!(account_id = %id, "Queued account delete");
        self.changes.push(PendingChange::DeleteAccount(id));
    }
}
