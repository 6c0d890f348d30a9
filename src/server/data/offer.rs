//! Offer and coupon repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::offer::{CreateOfferParam, UpdateOfferParam};

pub struct OfferRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateOfferParam) -> Result<entity::offer::Model, DbErr> {
        entity::offer::ActiveModel {
            code: ActiveValue::Set(param.code),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            offer_type: ActiveValue::Set(param.offer_type),
            value: ActiveValue::Set(param.value),
            min_order_value: ActiveValue::Set(param.min_order_value),
            max_discount: ActiveValue::Set(param.max_discount),
            starts_at: ActiveValue::Set(param.starts_at),
            ends_at: ActiveValue::Set(param.ends_at),
            usage_limit: ActiveValue::Set(param.usage_limit),
            used_count: ActiveValue::Set(0),
            is_automatic: ActiveValue::Set(param.is_automatic),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find_by_id(id).one(self.db).await
    }

    /// Looks up an offer by its normalised (uppercase) code.
    ///
    /// # Arguments
    /// - `code` - Uppercased coupon code
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The matching offer
    /// - `Ok(None)` - No offer uses this code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find()
            .filter(entity::offer::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find()
            .order_by_desc(entity::offer::Column::CreatedAt)
            .order_by_desc(entity::offer::Column::Id)
            .all(self.db)
            .await
    }

    /// Active offers whose window contains `now`. Usage limits are checked by the caller.
    ///
    /// # Arguments
    /// - `now` - Point in time to check
    /// - `automatic_only` - Only offers applied without a code
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Running offers, ending soonest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_running(
        &self,
        now: DateTime<Utc>,
        automatic_only: bool,
    ) -> Result<Vec<entity::offer::Model>, DbErr> {
        use entity::offer::Column;

        let mut condition = Condition::all()
            .add(Column::IsActive.eq(true))
            .add(Column::StartsAt.lte(now))
            .add(Column::EndsAt.gte(now));
        if automatic_only {
            condition = condition.add(Column::IsAutomatic.eq(true));
        }

        entity::prelude::Offer::find()
            .filter(condition)
            .order_by_asc(Column::EndsAt)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `param` to the offer.
    ///
    /// # Arguments
    /// - `offer` - Current offer row
    /// - `param` - Changed fields; `None` fields are left alone
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated offer
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        offer: entity::offer::Model,
        param: UpdateOfferParam,
    ) -> Result<entity::offer::Model, DbErr> {
        let mut active = offer.into_active_model();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(value) = param.value {
            active.value = ActiveValue::Set(value);
        }
        if let Some(min_order_value) = param.min_order_value {
            active.min_order_value = ActiveValue::Set(min_order_value);
        }
        if let Some(max_discount) = param.max_discount {
            active.max_discount = ActiveValue::Set(Some(max_discount));
        }
        if let Some(starts_at) = param.starts_at {
            active.starts_at = ActiveValue::Set(starts_at);
        }
        if let Some(ends_at) = param.ends_at {
            active.ends_at = ActiveValue::Set(ends_at);
        }
        if let Some(usage_limit) = param.usage_limit {
            active.usage_limit = ActiveValue::Set(Some(usage_limit));
        }
        if let Some(is_automatic) = param.is_automatic {
            active.is_automatic = ActiveValue::Set(is_automatic);
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Offer::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }

    /// Counts one redemption.
    pub async fn increment_used(&self, id: i32) -> Result<(), DbErr> {
        use entity::offer::Column;

        entity::prelude::Offer::update_many()
            .col_expr(Column::UsedCount, Expr::col(Column::UsedCount).add(1))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
