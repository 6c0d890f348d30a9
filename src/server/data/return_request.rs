//! Return request repository.
//!
//! A return stays open while it is `requested`, `approved` or `picked_up`.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::return_request::{CreateReturnParam, ReturnFilter, ReturnStatus};

const OPEN_STATUSES: [ReturnStatus; 3] = [
    ReturnStatus::Requested,
    ReturnStatus::Approved,
    ReturnStatus::PickedUp,
];

/// Repository providing database operations for return requests.
pub struct ReturnRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReturnRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a `requested` return for part or all of an order item.
    ///
    /// # Arguments
    /// - `param` - Order, item, customer, seller, quantity and reason
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored return
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateReturnParam,
    ) -> Result<entity::return_request::Model, DbErr> {
        let now = Utc::now();
        entity::return_request::ActiveModel {
            order_id: ActiveValue::Set(param.order_id),
            order_item_id: ActiveValue::Set(param.order_item_id),
            user_id: ActiveValue::Set(param.user_id),
            seller_id: ActiveValue::Set(param.seller_id),
            quantity: ActiveValue::Set(param.quantity),
            reason: ActiveValue::Set(param.reason),
            status: ActiveValue::Set(ReturnStatus::Requested),
            refund_amount: ActiveValue::Set(None),
            note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::return_request::Model>, DbErr> {
        entity::prelude::ReturnRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Returns newest first, narrowed by the filter's user, seller and status.
    ///
    /// # Arguments
    /// - `filter` - Optional customer, seller and status
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching returns
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        filter: ReturnFilter,
    ) -> Result<Vec<entity::return_request::Model>, DbErr> {
        use entity::return_request::Column;

        let mut query = entity::prelude::ReturnRequest::find();
        if let Some(user_id) = filter.user_id {
            query = query.filter(Column::UserId.eq(user_id));
        }
        if let Some(seller_id) = filter.seller_id {
            query = query.filter(Column::SellerId.eq(seller_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status));
        }
        query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }

    /// Units of an order item already claimed by returns that were not rejected.
    ///
    /// # Arguments
    /// - `order_item_id` - Order item to check
    ///
    /// # Returns
    /// - `Ok(i32)` - Units requested, approved, picked up or refunded
    /// - `Err(DbErr)` - Database error during query
    pub async fn claimed_units(&self, order_item_id: i32) -> Result<i32, DbErr> {
        let returns = entity::prelude::ReturnRequest::find()
            .filter(entity::return_request::Column::OrderItemId.eq(order_item_id))
            .filter(
                entity::return_request::Column::Status.ne(ReturnStatus::Rejected),
            )
            .all(self.db)
            .await?;
        Ok(returns.iter().map(|r| r.quantity).sum())
    }

    /// Whether the order item has a return that is still being handled.
    pub async fn has_open_for_item(&self, order_item_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ReturnRequest::find()
            .filter(entity::return_request::Column::OrderItemId.eq(order_item_id))
            .filter(
                entity::return_request::Column::Status
                    .is_in(OPEN_STATUSES),
            )
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn count_open(&self) -> Result<u64, DbErr> {
        entity::prelude::ReturnRequest::find()
            .filter(
                entity::return_request::Column::Status
                    .is_in(OPEN_STATUSES),
            )
            .count(self.db)
            .await
    }

    /// Moves a return from `from` to `to` only if it is still in `from`.
    ///
    /// # Arguments
    /// - `id` - Return id
    /// - `from` - Status the return is expected to be in
    /// - `to` - Status to move to
    /// - `note` - Note to store, left unchanged when `None`
    /// - `refund_amount` - Refunded amount to store, left unchanged when `None`
    ///
    /// # Returns
    /// - `Ok(true)` - The return moved
    /// - `Ok(false)` - The guard failed; this is how a second refund attempt is detected
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition(
        &self,
        id: i32,
        from: ReturnStatus,
        to: ReturnStatus,
        note: Option<String>,
        refund_amount: Option<i64>,
    ) -> Result<bool, DbErr> {
        use entity::return_request::Column;

        let mut update = entity::prelude::ReturnRequest::update_many()
            .col_expr(Column::Status, Expr::value(to.to_value()))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(note) = note {
            update = update.col_expr(Column::Note, Expr::value(note));
        }
        if let Some(refund_amount) = refund_amount {
            update = update.col_expr(Column::RefundAmount, Expr::value(refund_amount));
        }
        let result = update
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(from))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
