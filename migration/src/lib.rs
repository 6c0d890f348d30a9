pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_seller_table;
mod m20260105_000003_create_product_table;
mod m20260105_000004_create_review_table;
mod m20260105_000005_create_cart_item_table;
mod m20260105_000006_create_wishlist_item_table;
mod m20260105_000007_create_compare_item_table;
mod m20260106_000008_create_offer_table;
mod m20260106_000009_create_flash_sale_table;
mod m20260106_000010_create_flash_sale_product_table;
mod m20260107_000011_create_order_table;
mod m20260107_000012_create_order_item_table;
mod m20260107_000013_create_commission_table;
mod m20260107_000014_create_wallet_table;
mod m20260107_000015_create_wallet_transaction_table;
mod m20260107_000016_create_payout_table;
mod m20260108_000017_create_return_request_table;
mod m20260108_000018_create_notification_table;
mod m20260108_000019_create_abandoned_cart_table;
mod m20260108_000020_create_search_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_seller_table::Migration),
            Box::new(m20260105_000003_create_product_table::Migration),
            Box::new(m20260105_000004_create_review_table::Migration),
            Box::new(m20260105_000005_create_cart_item_table::Migration),
            Box::new(m20260105_000006_create_wishlist_item_table::Migration),
            Box::new(m20260105_000007_create_compare_item_table::Migration),
            Box::new(m20260106_000008_create_offer_table::Migration),
            Box::new(m20260106_000009_create_flash_sale_table::Migration),
            Box::new(m20260106_000010_create_flash_sale_product_table::Migration),
            Box::new(m20260107_000011_create_order_table::Migration),
            Box::new(m20260107_000012_create_order_item_table::Migration),
            Box::new(m20260107_000013_create_commission_table::Migration),
            Box::new(m20260107_000014_create_wallet_table::Migration),
            Box::new(m20260107_000015_create_wallet_transaction_table::Migration),
            Box::new(m20260107_000016_create_payout_table::Migration),
            Box::new(m20260108_000017_create_return_request_table::Migration),
            Box::new(m20260108_000018_create_notification_table::Migration),
            Box::new(m20260108_000019_create_abandoned_cart_table::Migration),
            Box::new(m20260108_000020_create_search_history_table::Migration),
        ]
    }
}
