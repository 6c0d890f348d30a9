//! Shopping cart repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::cart::AddCartItemParam;

pub struct CartItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cart lines with their products, oldest line first.
    ///
    /// # Arguments
    /// - `user_id` - Cart owner
    ///
    /// # Returns
    /// - `Ok(Vec<(item, product)>)` - Lines with their product; `None` if the product is gone
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::cart_item::Model, Option<entity::product::Model>)>, DbErr> {
        entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Product)
            .order_by_asc(entity::cart_item::Column::CreatedAt)
            .order_by_asc(entity::cart_item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<Option<entity::cart_item::Model>, DbErr> {
        entity::prelude::CartItem::find_by_id(id)
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Finds the line holding the same product variant.
    ///
    /// A missing size or color only matches lines without one.
    ///
    /// # Arguments
    /// - `user_id` - Cart owner
    /// - `product_id` - Product on the line
    /// - `size` - Chosen size, if any
    /// - `color` - Chosen color, if any
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The existing line
    /// - `Ok(None)` - The variant is not in the cart yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_line(
        &self,
        user_id: i32,
        product_id: i32,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<Option<entity::cart_item::Model>, DbErr> {
        use entity::cart_item::Column;

        let mut query = entity::prelude::CartItem::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ProductId.eq(product_id));
        query = match size {
            Some(size) => query.filter(Column::Size.eq(size)),
            None => query.filter(Column::Size.is_null()),
        };
        query = match color {
            Some(color) => query.filter(Column::Color.eq(color)),
            None => query.filter(Column::Color.is_null()),
        };
        query.one(self.db).await
    }

    pub async fn create(
        &self,
        user_id: i32,
        param: AddCartItemParam,
    ) -> Result<entity::cart_item::Model, DbErr> {
        let now = Utc::now();
        entity::cart_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            product_id: ActiveValue::Set(param.product_id),
            quantity: ActiveValue::Set(param.quantity),
            size: ActiveValue::Set(param.size),
            color: ActiveValue::Set(param.color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn set_quantity(
        &self,
        item: entity::cart_item::Model,
        quantity: i32,
    ) -> Result<entity::cart_item::Model, DbErr> {
        let mut active = item.into_active_model();
        active.quantity = ActiveValue::Set(quantity);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Deletes a line owned by `user_id`; returns the number of rows removed.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::Id.eq(id))
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn clear(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
