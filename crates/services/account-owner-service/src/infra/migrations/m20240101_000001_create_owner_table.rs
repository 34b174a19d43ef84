//! Migration: Create the owner table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Owner::OwnerId).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Owner::Name).string_len(60).not_null())
                    .col(
                        ColumnDef::new(Owner::DateOfBirth)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Owner::Address).string_len(100).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Owner {
    Table,
    OwnerId,
    Name,
    DateOfBirth,
    Address,
}
