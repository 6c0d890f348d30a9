//! Cart item factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Puts `quantity` units of `product_id` (size M, black) in the cart of `user_id`.
pub async fn create_cart_item(
    db: &DatabaseConnection,
    user_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<entity::cart_item::Model, DbErr> {
    let now = Utc::now();
    entity::cart_item::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        product_id: ActiveValue::Set(product_id),
        quantity: ActiveValue::Set(quantity),
        size: ActiveValue::Set(Some("M".to_string())),
        color: ActiveValue::Set(Some("black".to_string())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
