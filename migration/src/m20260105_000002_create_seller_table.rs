use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seller::Table)
                    .if_not_exists()
                    .col(pk_auto(Seller::Id))
                    .col(integer_uniq(Seller::UserId))
                    .col(string(Seller::StoreName))
                    .col(text_null(Seller::Description))
                    .col(string_null(Seller::Phone))
                    .col(string_null(Seller::BusinessId))
                    .col(text_null(Seller::PickupAddress))
                    .col(string(Seller::Status).default("pending"))
                    .col(string_null(Seller::StatusNote))
                    .col(integer(Seller::CommissionRateBps))
                    .col(
                        timestamp_with_time_zone(Seller::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Seller::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seller_user_id")
                            .from(Seller::Table, Seller::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seller::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Seller {
    Table,
    Id,
    UserId,
    StoreName,
    Description,
    Phone,
    BusinessId,
    PickupAddress,
    Status,
    StatusNote,
    CommissionRateBps,
    CreatedAt,
    UpdatedAt,
}
