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
                    .table(AbandonedCart::Table)
                    .if_not_exists()
                    .col(pk_auto(AbandonedCart::Id))
                    .col(integer_uniq(AbandonedCart::UserId))
                    .col(json(AbandonedCart::Items))
                    .col(big_integer(AbandonedCart::Total))
                    .col(string(AbandonedCart::Status).default("active"))
                    .col(integer(AbandonedCart::ReminderCount).default(0))
                    .col(timestamp_with_time_zone_null(AbandonedCart::LastRemindedAt))
                    .col(timestamp_with_time_zone(AbandonedCart::LastActivityAt))
                    .col(
                        timestamp_with_time_zone(AbandonedCart::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_abandoned_cart_user_id")
                            .from(AbandonedCart::Table, AbandonedCart::UserId)
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
            .drop_table(Table::drop().table(AbandonedCart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AbandonedCart {
    Table,
    Id,
    UserId,
    Items,
    Total,
    Status,
    ReminderCount,
    LastRemindedAt,
    LastActivityAt,
    CreatedAt,
}
