use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::product::ProductStatus;

pub struct CompareRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompareRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<entity::compare_item::Model, DbErr> {
        entity::compare_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            product_id: ActiveValue::Set(product_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn contains(&self, user_id: i32, product_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::CompareItem::find()
            .filter(entity::compare_item::Column::UserId.eq(user_id))
            .filter(entity::compare_item::Column::ProductId.eq(product_id))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Counts a user's compared products that are still listed.
    ///
    /// Rows pointing at archived products stay in the table but don't take up a slot.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the compare list
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of compared products with `active` status
    /// - `Err(DbErr)` - Database error during count
    pub async fn count_active(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CompareItem::find()
            .join(JoinType::InnerJoin, entity::compare_item::Relation::Product.def())
            .filter(entity::compare_item::Column::UserId.eq(user_id))
            .filter(entity::product::Column::Status.eq(ProductStatus::Active))
            .count(self.db)
            .await
    }

    /// Compared products in the order they were added.
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::compare_item::Model, Option<entity::product::Model>)>, DbErr> {
        entity::prelude::CompareItem::find()
            .filter(entity::compare_item::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Product)
            .order_by_asc(entity::compare_item::Column::CreatedAt)
            .order_by_asc(entity::compare_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the number of rows removed.
    pub async fn remove(&self, user_id: i32, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CompareItem::delete_many()
            .filter(entity::compare_item::Column::UserId.eq(user_id))
            .filter(entity::compare_item::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn clear(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CompareItem::delete_many()
            .filter(entity::compare_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
