//! Product review repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a review.
    ///
    /// Rating bounds and the one-review-per-customer rule are checked by the caller.
    ///
    /// # Arguments
    /// - `product_id` - Reviewed product
    /// - `user_id` - Reviewing customer
    /// - `rating` - Rating from 1 to 5
    /// - `comment` - Review text
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored review
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        product_id: i32,
        user_id: i32,
        rating: i32,
        comment: String,
    ) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            user_id: ActiveValue::Set(user_id),
            rating: ActiveValue::Set(rating),
            comment: ActiveValue::Set(comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn exists(&self, product_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::ProductId.eq(product_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Reviews of a product newest first.
    pub async fn list_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::ProductId.eq(product_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await
    }
}
