use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlashSale::Table)
                    .if_not_exists()
                    .col(pk_auto(FlashSale::Id))
                    .col(string(FlashSale::Title))
                    .col(integer(FlashSale::DiscountPercent))
                    .col(timestamp_with_time_zone(FlashSale::StartsAt))
                    .col(timestamp_with_time_zone(FlashSale::EndsAt))
                    .col(boolean(FlashSale::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(FlashSale::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlashSale::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlashSale {
    Table,
    Id,
    Title,
    DiscountPercent,
    StartsAt,
    EndsAt,
    IsActive,
    CreatedAt,
}
