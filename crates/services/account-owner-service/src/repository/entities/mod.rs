//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod account;
pub mod owner;

#[allow(unused_imports)]
pub use account::{ActiveModel as AccountActiveModel, Entity as AccountEntity, Model as AccountModel};
#[allow(unused_imports)]
pub use owner::{ActiveModel as OwnerActiveModel, Entity as OwnerEntity, Model as OwnerModel};

use sea_orm::sea_query::Expr;
use sea_orm::Condition;

/// Condition that holds for every row (`1 = 1`).
pub(crate) fn always() -> Condition {
    Condition::all().add(Expr::val(1).eq(1))
}

/// Condition that holds for no row (`1 = 0`).
pub(crate) fn never() -> Condition {
    Condition::any().add(Expr::val(1).eq(0))
}
