//! Abandoned cart factory.

use chrono::{DateTime, Utc};
use entity::abandoned_cart::AbandonedCartStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Inserts an active abandoned-cart record for `user_id` whose last activity was at
/// `last_activity_at`, with `reminder_count` reminders already sent.
///
/// The snapshot holds two units of a single 49,900 line.
pub async fn create_abandoned_cart(
    db: &DatabaseConnection,
    user_id: i32,
    last_activity_at: DateTime<Utc>,
    reminder_count: i32,
) -> Result<entity::abandoned_cart::Model, DbErr> {
    entity::abandoned_cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        items: ActiveValue::Set(json!([{
            "product_id": 1,
            "name": "Linen Shirt",
            "image": null,
            "unit_price": 49_900,
            "quantity": 2,
            "size": "M",
            "color": "white",
        }])),
        total: ActiveValue::Set(99_800),
        status: ActiveValue::Set(AbandonedCartStatus::Active),
        reminder_count: ActiveValue::Set(reminder_count),
        last_reminded_at: ActiveValue::Set(None),
        last_activity_at: ActiveValue::Set(last_activity_at),
        created_at: ActiveValue::Set(last_activity_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
