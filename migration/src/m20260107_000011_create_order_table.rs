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
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string_uniq(Order::OrderNumber))
                    .col(integer(Order::UserId))
                    .col(string(Order::Status))
                    .col(string(Order::PaymentMethod))
                    .col(string(Order::PaymentStatus))
                    .col(string_null(Order::GatewayOrderId))
                    .col(string_null(Order::GatewayPaymentId))
                    .col(big_integer(Order::Subtotal))
                    .col(big_integer(Order::Discount).default(0))
                    .col(big_integer(Order::ShippingFee).default(0))
                    .col(big_integer(Order::Total))
                    .col(integer_null(Order::OfferId))
                    .col(json(Order::ShippingAddress))
                    .col(timestamp_with_time_zone_null(Order::DeliveredAt))
                    .col(
                        timestamp_with_time_zone(Order::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Order::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user_id")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_user_id")
                    .table(Order::Table)
                    .col(Order::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    OrderNumber,
    UserId,
    Status,
    PaymentMethod,
    PaymentStatus,
    GatewayOrderId,
    GatewayPaymentId,
    Subtotal,
    Discount,
    ShippingFee,
    Total,
    OfferId,
    ShippingAddress,
    DeliveredAt,
    CreatedAt,
    UpdatedAt,
}
