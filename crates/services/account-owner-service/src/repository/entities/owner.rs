//! Owner database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use domain::{Owner, OwnerFilter};

use super::{always, never};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: Uuid,
    pub name: String,
    pub date_of_birth: DateTimeUtc,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::account::Entity")]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Owner {
    fn from(model: Model) -> Self {
        Owner {
            id: model.owner_id,
            name: model.name,
            date_of_birth: model.date_of_birth,
            address: model.address,
        }
    }
}

/// Full replacement: every column is set
impl From<Owner> for ActiveModel {
    fn from(owner: Owner) -> Self {
        ActiveModel {
            owner_id: Set(owner.id),
            name: Set(owner.name),
            date_of_birth: Set(owner.date_of_birth),
            address: Set(owner.address),
        }
    }
}

/// Translate a domain filter into a SQL condition
pub fn condition(filter: OwnerFilter) -> Condition {
    match filter {
        OwnerFilter::Id(id) => Condition::all().add(Column::OwnerId.eq(id)),
        OwnerFilter::Name(name) => Condition::all().add(Column::Name.eq(name)),
        OwnerFilter::Address(address) => Condition::all().add(Column::Address.eq(address)),
        OwnerFilter::BornBefore(at) => Condition::all().add(Column::DateOfBirth.lt(at)),
        OwnerFilter::BornOnOrAfter(at) => Condition::all().add(Column::DateOfBirth.gte(at)),
        OwnerFilter::And(filters) => filters
            .into_iter()
            .fold(always(), |acc, f| acc.add(condition(f))),
        OwnerFilter::Or(filters) => filters
            .into_iter()
            .fold(never(), |acc, f| acc.add(condition(f))),
        OwnerFilter::Not(filter) => condition(*filter).not(),
    }
}
