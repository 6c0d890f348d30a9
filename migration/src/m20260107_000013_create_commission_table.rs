use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260107_000011_create_order_table::Order,
    m20260105_000002_create_seller_table::Seller,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commission::Table)
                    .if_not_exists()
                    .col(pk_auto(Commission::Id))
                    .col(integer(Commission::OrderId))
                    .col(integer_uniq(Commission::OrderItemId))
                    .col(integer(Commission::SellerId))
                    .col(integer(Commission::Quantity))
                    .col(big_integer(Commission::Amount))
                    .col(integer(Commission::RateBps))
                    .col(big_integer(Commission::PlatformFee))
                    .col(big_integer(Commission::SellerEarning))
                    .col(string(Commission::Status).default("pending"))
                    .col(big_integer_null(Commission::FinalSettlement))
                    .col(timestamp_with_time_zone_null(Commission::SettledAt))
                    .col(
                        timestamp_with_time_zone(Commission::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commission_order_id")
                            .from(Commission::Table, Commission::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commission_seller_id")
                            .from(Commission::Table, Commission::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_commission_seller_id")
                    .table(Commission::Table)
                    .col(Commission::SellerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Commission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Commission {
    Table,
    Id,
    OrderId,
    OrderItemId,
    SellerId,
    Quantity,
    Amount,
    RateBps,
    PlatformFee,
    SellerEarning,
    Status,
    FinalSettlement,
    SettledAt,
    CreatedAt,
}
