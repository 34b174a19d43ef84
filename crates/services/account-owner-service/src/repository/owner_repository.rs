//! Owner repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::base::ReadRepository;
use super::change_set::{ChangeSet, PendingChange};
use super::entities::{owner, OwnerEntity, OwnerModel};
use common::AppResult;
use domain::{Owner, OwnerFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Owner repository trait for dependency injection.
///
/// Queries read committed storage state. `create`, `update` and `delete`
/// only queue the mutation; it is applied by the wrapper's `save()`.
/// `track_changes` is accepted for contract parity and does not alter results.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Every owner, in no particular order
    async fn find_all(&self, track_changes: bool) -> AppResult<Vec<Owner>>;

    /// Owners matching the filter
    async fn find_by_condition(&self, filter: OwnerFilter, track_changes: bool) -> AppResult<Vec<Owner>>;

    /// Owner by identifier
    async fn find_by_id(&self, id: Uuid, track_changes: bool) -> AppResult<Option<Owner>>;

    /// Queue an insert, assigning an identifier if the owner has none
    fn create(&self, owner: Owner) -> AppResult<Uuid>;

    /// Queue a full replacement of an existing owner
    fn update(&self, owner: Owner) -> AppResult<()>;

    /// Queue a delete
    fn delete(&self, id: Uuid);
}

/// Concrete implementation of OwnerRepository
pub struct OwnerStore {
    db: DatabaseConnection,
    changes: ChangeSet,
}

impl OwnerStore {
    /// Create new repository instance sharing the wrapper's change set
    pub fn new(db: DatabaseConnection, changes: ChangeSet) -> Self {
        Self { db, changes }
    }
}

impl ReadRepository<OwnerEntity, OwnerModel> for OwnerStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl OwnerRepository for OwnerStore {
    async fn find_all(&self, track_changes: bool) -> AppResult<Vec<Owner>> {
        let models = self.fetch_all(track_changes).await?;
        Ok(models.into_iter().map(Owner::from).collect())
    }

    async fn find_by_condition(&self, filter: OwnerFilter, track_changes: bool) -> AppResult<Vec<Owner>> {
        let models = self
            .fetch_matching(owner::condition(filter), track_changes)
            .await?;
        Ok(models.into_iter().map(Owner::from).collect())
    }

    async fn find_by_id(&self, id: Uuid, _track_changes: bool) -> AppResult<Option<Owner>> {
        let result = self.fetch_by_id(id).await?;
        Ok(result.map(Owner::from))
    }

    fn create(&self, mut owner: Owner) -> AppResult<Uuid> {
        owner.validate()?;
        let id = owner.ensure_id();
        tracing::debug!(owner_id = %id, "Queued owner insert");
        self.changes.push(PendingChange::InsertOwner(owner));
        Ok(id)
    }

    fn update(&self, owner: Owner) -> AppResult<()> {
        owner.validate()?;
        tracing::debug!(owner_id = %owner.id, "Queued owner update");
        self.changes.push(PendingChange::UpdateOwner(owner));
        Ok(())
    }

    fn delete(&self, id: Uuid) {
        tracing::debug!(owner_id = %id, "Queued owner delete");
        self.changes.push(PendingChange::DeleteOwner(id));
    }
}
