//! Abandoned cart repository.
//!
//! Each user has at most one snapshot of their cart, refreshed on every cart change and
//! read by the reminder job.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::abandoned_cart::{AbandonedCartItem, AbandonedCartStatus};

pub struct AbandonedCartRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AbandonedCartRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::abandoned_cart::Model>, DbErr> {
        entity::prelude::AbandonedCart::find()
            .filter(entity::abandoned_cart::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Stores the latest cart snapshot as `active` with fresh activity.
    ///
    /// The reminder count restarts when the items differ from the stored snapshot.
    ///
    /// # Arguments
    /// - `user_id` - Cart owner
    /// - `items` - Current cart lines
    /// - `total` - Cart subtotal in minor units
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored snapshot
    /// - `Err(DbErr)` - Database error, or the items could not be encoded
    pub async fn upsert(
        &self,
        user_id: i32,
        items: &[AbandonedCartItem],
        total: i64,
    ) -> Result<entity::abandoned_cart::Model, DbErr> {
        let now = Utc::now();
        let snapshot = serde_json::to_value(items)
            .map_err(|e| DbErr::Custom(format!("Failed to encode cart snapshot: {}", e)))?;

        match self.find_by_user(user_id).await? {
            Some(existing) => {
                let items_changed = existing.items != snapshot;
                let mut active = existing.into_active_model();
                if items_changed {
                    active.reminder_count = ActiveValue::Set(0);
                    active.last_reminded_at = ActiveValue::Set(None);
                }
                active.items = ActiveValue::Set(snapshot);
                active.total = ActiveValue::Set(total);
                active.status = ActiveValue::Set(AbandonedCartStatus::Active);
                active.last_activity_at = ActiveValue::Set(now);
                active.update(self.db).await
            }
            None => {
                entity::abandoned_cart::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    items: ActiveValue::Set(snapshot),
                    total: ActiveValue::Set(total),
                    status: ActiveValue::Set(AbandonedCartStatus::Active),
                    reminder_count: ActiveValue::Set(0),
                    last_reminded_at: ActiveValue::Set(None),
                    last_activity_at: ActiveValue::Set(now),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AbandonedCart::delete_many()
            .filter(entity::abandoned_cart::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Sets the status of the user's snapshot.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows changed, `0` when the user has no snapshot
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        user_id: i32,
        status: AbandonedCartStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::AbandonedCart::update_many()
            .col_expr(
                entity::abandoned_cart::Column::Status,
                Expr::value(status.to_value()),
            )
            .filter(entity::abandoned_cart::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Active records whose last activity is at or before `idle_since`, oldest first.
    ///
    /// # Arguments
    /// - `idle_since` - Cut-off time for cart activity
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Idle snapshots
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_idle(
        &self,
        idle_since: DateTime<Utc>,
    ) -> Result<Vec<entity::abandoned_cart::Model>, DbErr> {
        entity::prelude::AbandonedCart::find()
            .filter(
                entity::abandoned_cart::Column::Status
                    .eq(AbandonedCartStatus::Active),
            )
            .filter(entity::abandoned_cart::Column::LastActivityAt.lte(idle_since))
            .order_by_asc(entity::abandoned_cart::Column::LastActivityAt)
            .all(self.db)
            .await
    }

    /// Counts one sent reminder.
    pub async fn record_reminder(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        use entity::abandoned_cart::Column;

        entity::prelude::AbandonedCart::update_many()
            .col_expr(Column::ReminderCount, Expr::col(Column::ReminderCount).add(1))
            .col_expr(Column::LastRemindedAt, Expr::value(at))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
