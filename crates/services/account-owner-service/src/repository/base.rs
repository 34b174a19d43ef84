//! Base read operations shared by every entity store.
//!
//! Stores implement `db()` and inherit the queries. Reads always go straight
//! to storage; queued mutations become visible only after `save()`.

use async_trait::async_trait;
use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, FromQueryResult, PrimaryKeyTrait, QueryFilter,
};

use common::AppResult;

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Fetch every row of the entity
    async fn fetch_all(&self, track_changes: bool) -> AppResult<Vec<M>> {
        tracing::trace!(table = E::default().table_name(), track_changes, "fetch all");
        E::find().all(self.db()).await.map_err(Into::into)
    }

    /// Fetch the rows matching a condition
    async fn fetch_matching(&self, condition: Condition, track_changes: bool) -> AppResult<Vec<M>> {
        tracing::trace!(table = E::default().table_name(), track_changes, "fetch matching");
        E::find()
            .filter(condition)
            .all(self.db())
            .await
            .map_err(Into::into)
    }

    /// Fetch a row by primary key
    async fn fetch_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<M>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send,
    {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }
}
