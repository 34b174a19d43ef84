//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use domain::{Account, AccountFilter};

use super::{always, never};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: Uuid,
    pub date_created: DateTimeUtc,
    pub account_type: String,
    pub owner_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::OwnerId",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Owner,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            id: model.account_id,
            date_created: model.date_created,
            account_type: model.account_type,
            owner_id: model.owner_id,
        }
    }
}

/// Full replacement: every column is set
impl From<Account> for ActiveModel {
    fn from(account: Account) -> Self {
        ActiveModel {
            account_id: Set(account.id),
            date_created: Set(account.date_created),
            account_type: Set(account.account_type),
            owner_id: Set(account.owner_id),
        }
    }
}

/// Translate a domain filter into a SQL condition
pub fn condition(filter: AccountFilter) -> Condition {
    match filter {
        AccountFilter::Id(id) => Condition::all().add(Column::AccountId.eq(id)),
        AccountFilter::OwnerId(owner_id) => Condition::all().add(Column::OwnerId.eq(owner_id)),
        AccountFilter::AccountType(account_type) => {
            Condition::all().add(Column::AccountType.eq(account_type))
        }
        AccountFilter::CreatedBefore(at) => Condition::all().add(Column::DateCreated.lt(at)),
        AccountFilter::CreatedOnOrAfter(at) => Condition::all().add(Column::DateCreated.gte(at)),
        AccountFilter::And(filters) => filters
            .into_iter()
            .fold(always(), |acc, f| acc.add(condition(f))),
        AccountFilter::Or(filters) => filters
            .into_iter()
            .fold(never(), |acc, f| acc.add(condition(f))),
        AccountFilter::Not(filter) => condition(*filter).not(),
    }
}
