//! Commission factory.

use chrono::Utc;
use entity::commission::CommissionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a commission for an order line, computed at `rate_bps` with the given status.
///
/// Mirrors the server's rounding: the platform fee is `amount * rate / 10_000` rounded half up.
pub async fn create_commission(
    db: &DatabaseConnection,
    item: &entity::order_item::Model,
    seller_id: i32,
    rate_bps: i32,
    status: CommissionStatus,
) -> Result<entity::commission::Model, DbErr> {
    let amount = item.price * i64::from(item.quantity);
    let platform_fee = (amount * i64::from(rate_bps) + 5_000) / 10_000;

    entity::commission::ActiveModel {
        order_id: ActiveValue::Set(item.order_id),
        order_item_id: ActiveValue::Set(item.id),
        seller_id: ActiveValue::Set(seller_id),
        quantity: ActiveValue::Set(item.quantity),
        amount: ActiveValue::Set(amount),
        rate_bps: ActiveValue::Set(rate_bps),
        platform_fee: ActiveValue::Set(platform_fee),
        seller_earning: ActiveValue::Set(amount - platform_fee),
        status: ActiveValue::Set(status),
        final_settlement: ActiveValue::Set(None),
        settled_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
