//! Seller payout repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::wallet::PayoutStatus;

/// Repository providing database operations for payout requests.
pub struct PayoutRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PayoutRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a `requested` payout.
    ///
    /// # Arguments
    /// - `seller_id` - Requesting seller
    /// - `amount` - Amount in minor units, already checked against the balance
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored payout
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        seller_id: i32,
        amount: i64,
    ) -> Result<entity::payout::Model, DbErr> {
        entity::payout::ActiveModel {
            seller_id: ActiveValue::Set(seller_id),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(PayoutStatus::Requested),
            reference: ActiveValue::Set(None),
            note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            processed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::payout::Model>, DbErr> {
        entity::prelude::Payout::find_by_id(id).one(self.db).await
    }

    /// Payouts newest first, optionally for one seller and/or one status.
    ///
    /// # Arguments
    /// - `seller_id` - Only this seller's payouts, or `None` for all
    /// - `status` - Only payouts in this status, or `None` for all
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching payouts
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        seller_id: Option<i32>,
        status: Option<PayoutStatus>,
    ) -> Result<Vec<entity::payout::Model>, DbErr> {
        let mut query = entity::prelude::Payout::find();
        if let Some(seller_id) = seller_id {
            query = query.filter(entity::payout::Column::SellerId.eq(seller_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::payout::Column::Status.eq(status));
        }
        query
            .order_by_desc(entity::payout::Column::CreatedAt)
            .order_by_desc(entity::payout::Column::Id)
            .all(self.db)
            .await
    }

    /// Closes a `requested` payout.
    ///
    /// # Arguments
    /// - `id` - Payout id
    /// - `status` - `paid` or `rejected`
    /// - `reference` - Bank transfer reference for paid payouts
    /// - `note` - Admin note, usually the rejection reason
    ///
    /// # Returns
    /// - `Ok(true)` - The payout was closed
    /// - `Ok(false)` - It had already been processed; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn process(
        &self,
        id: i32,
        status: PayoutStatus,
        reference: Option<String>,
        note: Option<String>,
    ) -> Result<bool, DbErr> {
        use entity::payout::Column;

        let result = entity::prelude::Payout::update_many()
            .col_expr(Column::Status, Expr::value(status.to_value()))
            .col_expr(Column::Reference, Expr::value(reference))
            .col_expr(Column::Note, Expr::value(note))
            .col_expr(Column::ProcessedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(PayoutStatus::Requested))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }

    /// Sum of payouts still awaiting processing.
    pub async fn requested_total(&self) -> Result<i64, DbErr> {
        let total = entity::prelude::Payout::find()
            .select_only()
            .column_as(entity::payout::Column::Amount.sum(), "requested")
            .filter(entity::payout::Column::Status.eq(PayoutStatus::Requested))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;
        Ok(total.flatten().unwrap_or(0))
    }
}
