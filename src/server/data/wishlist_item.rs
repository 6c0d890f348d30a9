use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct WishlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<entity::wishlist_item::Model, DbErr> {
        entity::wishlist_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            product_id: ActiveValue::Set(product_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn contains(&self, user_id: i32, product_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::WishlistItem::find()
            .filter(entity::wishlist_item::Column::UserId.eq(user_id))
            .filter(entity::wishlist_item::Column::ProductId.eq(product_id))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Wishlist entries with their products, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Wishlist owner
    ///
    /// # Returns
    /// - `Ok(Vec<(entry, product)>)` - Entries with their product; `None` if the product is gone
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::wishlist_item::Model, Option<entity::product::Model>)>, DbErr> {
        entity::prelude::WishlistItem::find()
            .filter(entity::wishlist_item::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Product)
            .order_by_desc(entity::wishlist_item::Column::CreatedAt)
            .order_by_desc(entity::wishlist_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the number of rows removed.
    pub async fn remove(&self, user_id: i32, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WishlistItem::delete_many()
            .filter(entity::wishlist_item::Column::UserId.eq(user_id))
            .filter(entity::wishlist_item::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
