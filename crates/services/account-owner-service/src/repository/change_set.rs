//! Pending mutations shared by the repositories of one wrapper.

use std::sync::{Arc, Mutex, PoisonError};

use sea_orm::{ActiveModelTrait, DatabaseTransaction, EntityTrait};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Account, Owner};

use super::entities::{account, owner, AccountEntity, OwnerEntity};

/// A mutation queued by a repository, applied on `save()`.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    InsertOwner(Owner),
    UpdateOwner(Owner),
    DeleteOwner(Uuid),
    InsertAccount(Account),
    UpdateAccount(Account),
    DeleteAccount(Uuid),
}

impl PendingChange {
    /// Apply this change inside an open transaction.
    pub(crate) async fn apply(self, txn: &DatabaseTransaction) -> AppResult<()> {
        match self {
            PendingChange::InsertOwner(entity) => {
                owner::ActiveModel::from(entity).insert(txn).await?;
            }
            PendingChange::UpdateOwner(entity) => {
                owner::ActiveModel::from(entity).update(txn).await?;
            }
            PendingChange::DeleteOwner(id) => {
                let result = OwnerEntity::delete_by_id(id).exec(txn).await?;
                if result.rows_affected == 0 {
                    return Err(AppError::NotFound);
                }
            }
            PendingChange::InsertAccount(entity) => {
                account::ActiveModel::from(entity).insert(txn).await?;
            }
            PendingChange::UpdateAccount(entity) => {
                account::ActiveModel::from(entity).update(txn).await?;
            }
            PendingChange::DeleteAccount(id) => {
                let result = AccountEntity::delete_by_id(id).exec(txn).await?;
                if result.rows_affected == 0 {
                    return Err(AppError::NotFound);
                }
            }
        }
        Ok(())
    }
}

/// Ordered queue of pending changes. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    pending: Arc<Mutex<Vec<PendingChange>>>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a change
    pub fn push(&self, change: PendingChange) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change);
    }

    /// Drain every queued change, leaving the queue empty
    pub fn take(&self) -> Vec<PendingChange> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
