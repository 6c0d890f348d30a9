use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260107_000011_create_order_table::Order,
    m20260107_000012_create_order_item_table::OrderItem,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReturnRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ReturnRequest::Id))
                    .col(integer(ReturnRequest::OrderId))
                    .col(integer(ReturnRequest::OrderItemId))
                    .col(integer(ReturnRequest::UserId))
                    .col(integer_null(ReturnRequest::SellerId))
                    .col(integer(ReturnRequest::Quantity))
                    .col(text(ReturnRequest::Reason))
                    .col(string(ReturnRequest::Status).default("requested"))
                    .col(big_integer_null(ReturnRequest::RefundAmount))
                    .col(string_null(ReturnRequest::Note))
                    .col(
                        timestamp_with_time_zone(ReturnRequest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ReturnRequest::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_return_request_order_id")
                            .from(ReturnRequest::Table, ReturnRequest::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_return_request_order_item_id")
                            .from(ReturnRequest::Table, ReturnRequest::OrderItemId)
                            .to(OrderItem::Table, OrderItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReturnRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReturnRequest {
    Table,
    Id,
    OrderId,
    OrderItemId,
    UserId,
    SellerId,
    Quantity,
    Reason,
    Status,
    RefundAmount,
    Note,
    CreatedAt,
    UpdatedAt,
}
