use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_product_table::Product,
    m20260105_000001_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompareItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CompareItem::Id))
                    .col(integer(CompareItem::UserId))
                    .col(integer(CompareItem::ProductId))
                    .col(
                        timestamp_with_time_zone(CompareItem::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_compare_item_user_id")
                            .from(CompareItem::Table, CompareItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_compare_item_product_id")
                            .from(CompareItem::Table, CompareItem::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_compare_item_user_product")
                    .table(CompareItem::Table)
                    .col(CompareItem::UserId)
                    .col(CompareItem::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompareItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CompareItem {
    Table,
    Id,
    UserId,
    ProductId,
    CreatedAt,
}
