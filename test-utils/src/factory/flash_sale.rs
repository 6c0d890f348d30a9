//! Flash sale factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for flash sales and their product links.
///
/// Defaults to an active 20% sale that started an hour ago and ends in an hour.
pub struct FlashSaleFactory<'a> {
    db: &'a DatabaseConnection,
    discount_percent: i32,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    is_active: bool,
    product_ids: Vec<i32>,
}

impl<'a> FlashSaleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            discount_percent: 20,
            starts_at: now - Duration::hours(1),
            ends_at: now + Duration::hours(1),
            is_active: true,
            product_ids: Vec::new(),
        }
    }

    pub fn discount_percent(mut self, percent: i32) -> Self {
        self.discount_percent = percent;
        self
    }

    pub fn window(mut self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn product(mut self, product_id: i32) -> Self {
        self.product_ids.push(product_id);
        self
    }

    pub async fn build(self) -> Result<entity::flash_sale::Model, DbErr> {
        let sale = entity::flash_sale::ActiveModel {
            title: ActiveValue::Set(format!("Flash Sale {}", next_id())),
            discount_percent: ActiveValue::Set(self.discount_percent),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for product_id in self.product_ids {
            entity::flash_sale_product::ActiveModel {
                flash_sale_id: ActiveValue::Set(sale.id),
                product_id: ActiveValue::Set(product_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(sale)
    }
}

/// Creates an active 20% flash sale covering `product_id`.
pub async fn create_flash_sale(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<entity::flash_sale::Model, DbErr> {
    FlashSaleFactory::new(db).product(product_id).build().await
}
