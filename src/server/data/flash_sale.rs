//! Flash sale repository.
//!
//! A sale is linked to its products through `flash_sale_product`.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::offer::CreateFlashSaleParam;

/// Repository providing database operations for flash sales.
pub struct FlashSaleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlashSaleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active sale covering `param.product_ids`.
    ///
    /// # Arguments
    /// - `param` - Title, discount percent, time window and product ids
    ///
    /// # Returns
    /// - `Ok((sale, product_ids))` - The stored sale and the products it covers
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateFlashSaleParam,
    ) -> Result<(entity::flash_sale::Model, Vec<i32>), DbErr> {
        let sale = entity::flash_sale::ActiveModel {
            title: ActiveValue::Set(param.title),
            discount_percent: ActiveValue::Set(param.discount_percent),
            starts_at: ActiveValue::Set(param.starts_at),
            ends_at: ActiveValue::Set(param.ends_at),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for product_id in &param.product_ids {
            entity::flash_sale_product::ActiveModel {
                flash_sale_id: ActiveValue::Set(sale.id),
                product_id: ActiveValue::Set(*product_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok((sale, param.product_ids))
    }

    /// Every sale with its product ids, latest start first.
    pub async fn list_all(&self) -> Result<Vec<(entity::flash_sale::Model, Vec<i32>)>, DbErr> {
        let sales = entity::prelude::FlashSale::find()
            .order_by_desc(entity::flash_sale::Column::StartsAt)
            .all(self.db)
            .await?;
        self.with_products(sales).await
    }

    /// Active sales whose window contains `now`.
    ///
    /// # Arguments
    /// - `now` - Point in time to check
    ///
    /// # Returns
    /// - `Ok(Vec<(sale, product_ids)>)` - Live sales ending soonest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_live(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<(entity::flash_sale::Model, Vec<i32>)>, DbErr> {
        let sales = entity::prelude::FlashSale::find()
            .filter(entity::flash_sale::Column::IsActive.eq(true))
            .filter(entity::flash_sale::Column::StartsAt.lte(now))
            .filter(entity::flash_sale::Column::EndsAt.gte(now))
            .order_by_asc(entity::flash_sale::Column::EndsAt)
            .all(self.db)
            .await?;
        self.with_products(sales).await
    }

    /// Largest live discount percent for each of `product_ids` that has one.
    ///
    /// # Arguments
    /// - `now` - Point in time to check
    /// - `product_ids` - Products to price
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, i32>)` - Discount percent per product on a live sale
    /// - `Err(DbErr)` - Database error during query
    pub async fn best_live_percent(
        &self,
        now: DateTime<Utc>,
        product_ids: Vec<i32>,
    ) -> Result<HashMap<i32, i32>, DbErr> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::FlashSaleProduct::find()
            .filter(entity::flash_sale_product::Column::ProductId.is_in(product_ids))
            .find_also_related(entity::prelude::FlashSale)
            .filter(entity::flash_sale::Column::IsActive.eq(true))
            .filter(entity::flash_sale::Column::StartsAt.lte(now))
            .filter(entity::flash_sale::Column::EndsAt.gte(now))
            .all(self.db)
            .await?;

        let mut best: HashMap<i32, i32> = HashMap::new();
        for (link, sale) in rows {
            let Some(sale) = sale else { continue };
            let entry = best.entry(link.product_id).or_insert(0);
            *entry = (*entry).max(sale.discount_percent);
        }
        Ok(best)
    }

    /// Deletes a sale and its product links; returns the number of sales removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::FlashSaleProduct::delete_many()
            .filter(entity::flash_sale_product::Column::FlashSaleId.eq(id))
            .exec(self.db)
            .await?;
        let result = entity::prelude::FlashSale::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn with_products(
        &self,
        sales: Vec<entity::flash_sale::Model>,
    ) -> Result<Vec<(entity::flash_sale::Model, Vec<i32>)>, DbErr> {
        if sales.is_empty() {
            return Ok(Vec::new());
        }

        let sale_ids: Vec<i32> = sales.iter().map(|s| s.id).collect();
        let links = entity::prelude::FlashSaleProduct::find()
            .filter(entity::flash_sale_product::Column::FlashSaleId.is_in(sale_ids))
            .order_by_asc(entity::flash_sale_product::Column::ProductId)
            .all(self.db)
            .await?;

        let mut products: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            products
                .entry(link.flash_sale_id)
                .or_default()
                .push(link.product_id);
        }

        Ok(sales
            .into_iter()
            .map(|sale| {
                let ids = products.remove(&sale.id).unwrap_or_default();
                (sale, ids)
            })
            .collect())
    }
}
