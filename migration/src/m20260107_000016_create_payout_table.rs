use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_seller_table::Seller;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payout::Table)
                    .if_not_exists()
                    .col(pk_auto(Payout::Id))
                    .col(integer(Payout::SellerId))
                    .col(big_integer(Payout::Amount))
                    .col(string(Payout::Status).default("requested"))
                    .col(string_null(Payout::Reference))
                    .col(string_null(Payout::Note))
                    .col(
                        timestamp_with_time_zone(Payout::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Payout::ProcessedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payout_seller_id")
                            .from(Payout::Table, Payout::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payout {
    Table,
    Id,
    SellerId,
    Amount,
    Status,
    Reference,
    Note,
    CreatedAt,
    ProcessedAt,
}
