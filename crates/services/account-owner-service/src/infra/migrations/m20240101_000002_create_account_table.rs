//! Migration: Create the account table referencing owner.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_owner_table::Owner;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Account::AccountId).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Account::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Account::AccountType).string_len(30).not_null())
                    .col(ColumnDef::new(Account::OwnerId).uuid().not_null())
                    // Owners with accounts cannot be deleted
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_owner")
                            .from(Account::Table, Account::OwnerId)
                            .to(Owner::Table, Owner::OwnerId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_account_owner_id")
                    .table(Account::Table)
                    .col(Account::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_account_owner_id")
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Account {
    Table,
    AccountId,
    DateCreated,
    AccountType,
    OwnerId,
}
