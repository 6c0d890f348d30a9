use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(pk_auto(Offer::Id))
                    .col(string_null(Offer::Code).unique_key())
                    .col(string(Offer::Title))
                    .col(text_null(Offer::Description))
                    .col(string(Offer::OfferType))
                    .col(big_integer(Offer::Value).default(0))
                    .col(big_integer(Offer::MinOrderValue).default(0))
                    .col(big_integer_null(Offer::MaxDiscount))
                    .col(timestamp_with_time_zone(Offer::StartsAt))
                    .col(timestamp_with_time_zone(Offer::EndsAt))
                    .col(integer_null(Offer::UsageLimit))
                    .col(integer(Offer::UsedCount).default(0))
                    .col(boolean(Offer::IsAutomatic).default(false))
                    .col(boolean(Offer::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Offer::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Offer {
    Table,
    Id,
    Code,
    Title,
    Description,
    OfferType,
    Value,
    MinOrderValue,
    MaxDiscount,
    StartsAt,
    EndsAt,
    UsageLimit,
    UsedCount,
    IsAutomatic,
    IsActive,
    CreatedAt,
}
