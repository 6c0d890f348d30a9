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
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(integer_null(Product::SellerId))
                    .col(string(Product::Name))
                    .col(text(Product::Description))
                    .col(string(Product::Brand))
                    .col(string(Product::Category))
                    .col(string(Product::Gender))
                    .col(big_integer(Product::Price))
                    .col(big_integer(Product::Mrp))
                    .col(integer(Product::Stock).default(0))
                    .col(json(Product::Sizes))
                    .col(json(Product::Colors))
                    .col(json(Product::Images))
                    .col(string(Product::Status).default("active"))
                    .col(integer(Product::RatingTotal).default(0))
                    .col(integer(Product::ReviewCount).default(0))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_seller_id")
                            .from(Product::Table, Product::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_category")
                    .table(Product::Table)
                    .col(Product::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_seller_id")
                    .table(Product::Table)
                    .col(Product::SellerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    SellerId,
    Name,
    Description,
    Brand,
    Category,
    Gender,
    Price,
    Mrp,
    Stock,
    Sizes,
    Colors,
    Images,
    Status,
    RatingTotal,
    ReviewCount,
    CreatedAt,
    UpdatedAt,
}
