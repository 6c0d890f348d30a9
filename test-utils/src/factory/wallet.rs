//! Wallet factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a wallet for `user_id` holding `balance` minor units, without a ledger entry.
pub async fn create_wallet(
    db: &DatabaseConnection,
    user_id: i32,
    balance: i64,
) -> Result<entity::wallet::Model, DbErr> {
    entity::wallet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        balance: ActiveValue::Set(balance),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
