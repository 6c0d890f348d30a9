use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000009_create_flash_sale_table::FlashSale,
    m20260105_000003_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlashSaleProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(FlashSaleProduct::Id))
                    .col(integer(FlashSaleProduct::FlashSaleId))
                    .col(integer(FlashSaleProduct::ProductId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flash_sale_product_flash_sale_id")
                            .from(FlashSaleProduct::Table, FlashSaleProduct::FlashSaleId)
                            .to(FlashSale::Table, FlashSale::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flash_sale_product_product_id")
                            .from(FlashSaleProduct::Table, FlashSaleProduct::ProductId)
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
                    .name("idx_flash_sale_product_sale_product")
                    .table(FlashSaleProduct::Table)
                    .col(FlashSaleProduct::FlashSaleId)
                    .col(FlashSaleProduct::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlashSaleProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlashSaleProduct {
    Table,
    Id,
    FlashSaleId,
    ProductId,
}
