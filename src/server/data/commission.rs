//! Commission repository.
//!
//! One commission row per order item records the platform fee and the seller's share.
//! Status moves are guarded updates filtered on the expected current status.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    commission::{CommissionAmounts, CommissionFilter, CommissionStatus, CreateCommissionParam},
    seller::SellerEarnings,
};

/// Repository providing database operations for per-item commissions.
pub struct CommissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a `pending` commission for one order item.
    ///
    /// # Arguments
    /// - `param` - Order, item, seller, rate and the computed amounts
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored commission
    /// - `Err(DbErr)` - Database error, including a second commission for the same item
    pub async fn create(
        &self,
        param: CreateCommissionParam,
    ) -> Result<entity::commission::Model, DbErr> {
        entity::commission::ActiveModel {
            order_id: ActiveValue::Set(param.order_id),
            order_item_id: ActiveValue::Set(param.order_item_id),
            seller_id: ActiveValue::Set(param.seller_id),
            quantity: ActiveValue::Set(param.amounts.quantity),
            amount: ActiveValue::Set(param.amounts.amount),
            rate_bps: ActiveValue::Set(param.rate_bps),
            platform_fee: ActiveValue::Set(param.amounts.platform_fee),
            seller_earning: ActiveValue::Set(param.amounts.seller_earning),
            status: ActiveValue::Set(CommissionStatus::Pending),
            final_settlement: ActiveValue::Set(None),
            settled_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::commission::Model>, DbErr> {
        entity::prelude::Commission::find_by_id(id).one(self.db).await
    }

    /// Finds the commission recorded for an order item.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The item's commission
    /// - `Ok(None)` - No commission was recorded for the item
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_order_item(
        &self,
        order_item_id: i32,
    ) -> Result<Option<entity::commission::Model>, DbErr> {
        entity::prelude::Commission::find()
            .filter(entity::commission::Column::OrderItemId.eq(order_item_id))
            .one(self.db)
            .await
    }

    /// Commissions newest first, filtered by seller and status when given.
    ///
    /// # Arguments
    /// - `filter` - Optional seller id and status
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching commissions
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        filter: CommissionFilter,
    ) -> Result<Vec<entity::commission::Model>, DbErr> {
        let mut query = entity::prelude::Commission::find();
        if let Some(seller_id) = filter.seller_id {
            query = query.filter(entity::commission::Column::SellerId.eq(seller_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::commission::Column::Status.eq(status));
        }
        query
            .order_by_desc(entity::commission::Column::CreatedAt)
            .order_by_desc(entity::commission::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves every commission of `order_id` in status `from` to `to`.
    ///
    /// # Arguments
    /// - `order_id` - Order whose commissions to move
    /// - `from` - Only commissions currently in this status are touched
    /// - `to` - Status to move to
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of commissions moved
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition_for_order(
        &self,
        order_id: i32,
        from: CommissionStatus,
        to: CommissionStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Commission::update_many()
            .col_expr(entity::commission::Column::Status, Expr::value(to.to_value()))
            .filter(entity::commission::Column::OrderId.eq(order_id))
            .filter(entity::commission::Column::Status.eq(from))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Marks an `eligible` commission settled.
    ///
    /// # Arguments
    /// - `id` - Commission id
    /// - `final_settlement` - Amount actually paid to the seller
    /// - `settled_at` - Settlement time
    ///
    /// # Returns
    /// - `Ok(true)` - The commission was settled
    /// - `Ok(false)` - It was no longer eligible; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn settle(
        &self,
        id: i32,
        final_settlement: i64,
        settled_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::commission::Column;

        let result = entity::prelude::Commission::update_many()
            .col_expr(Column::Status, Expr::value(CommissionStatus::Settled.to_value()))
            .col_expr(Column::FinalSettlement, Expr::value(final_settlement))
            .col_expr(Column::SettledAt, Expr::value(settled_at))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(CommissionStatus::Eligible))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }

    /// Rewrites quantity and amounts after a refund, setting `status` alongside.
    ///
    /// # Arguments
    /// - `id` - Commission id
    /// - `amounts` - Recomputed quantity, amount, fee and earning
    /// - `status` - Status after the adjustment
    /// - `final_settlement` - Settled amount to store, cleared when `None`
    ///
    /// # Returns
    /// - `Ok(())` - Update issued
    /// - `Err(DbErr)` - Database error during update
    pub async fn adjust(
        &self,
        id: i32,
        amounts: CommissionAmounts,
        status: CommissionStatus,
        final_settlement: Option<i64>,
    ) -> Result<(), DbErr> {
        use entity::commission::Column;

        entity::prelude::Commission::update_many()
            .col_expr(Column::Quantity, Expr::value(amounts.quantity))
            .col_expr(Column::Amount, Expr::value(amounts.amount))
            .col_expr(Column::PlatformFee, Expr::value(amounts.platform_fee))
            .col_expr(Column::SellerEarning, Expr::value(amounts.seller_earning))
            .col_expr(Column::Status, Expr::value(status.to_value()))
            .col_expr(Column::FinalSettlement, Expr::value(final_settlement))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gross sales and earnings of a seller, ignoring reversed commissions.
    ///
    /// Settled rows count their final settlement; every other status counts as pending.
    ///
    /// # Arguments
    /// - `seller_id` - Seller to total up
    ///
    /// # Returns
    /// - `Ok(SellerEarnings)` - Gross sales, settled and pending earnings
    /// - `Err(DbErr)` - Database error during query
    pub async fn seller_earnings(&self, seller_id: i32) -> Result<SellerEarnings, DbErr> {
        let rows = entity::prelude::Commission::find()
            .filter(entity::commission::Column::SellerId.eq(seller_id))
            .filter(
                entity::commission::Column::Status.ne(CommissionStatus::Reversed),
            )
            .all(self.db)
            .await?;

        let mut earnings = SellerEarnings::default();
        for row in rows {
            earnings.gross_sales += row.amount;
            if row.status == CommissionStatus::Settled {
                earnings.settled_earnings += row.final_settlement.unwrap_or(row.seller_earning);
            } else {
                earnings.pending_earnings += row.seller_earning;
            }
        }
        Ok(earnings)
    }

    /// Platform fees across all non-reversed commissions.
    pub async fn platform_earnings(&self) -> Result<i64, DbErr> {
        let total = entity::prelude::Commission::find()
            .select_only()
            .column_as(entity::commission::Column::PlatformFee.sum(), "fees")
            .filter(
                entity::commission::Column::Status.ne(CommissionStatus::Reversed),
            )
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;
        Ok(total.flatten().unwrap_or(0))
    }
}
