//! Order repository.
//!
//! Orders are always loaded together with their line items. Status and payment changes
//! are single guarded updates so concurrent requests cannot both apply.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::order::{CreateOrderParam, OrderStatus, PaymentStatus};

type OrderWithItems = (entity::order::Model, Vec<entity::order_item::Model>);

/// Repository providing database operations for orders and their line items.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a `pending` order and its line items.
    ///
    /// Payment status starts as `pending` and no gateway ids are set.
    ///
    /// # Arguments
    /// - `param` - Order number, owner, totals, shipping address and priced line items
    ///
    /// # Returns
    /// - `Ok((order, items))` - The stored order and its lines in insertion order
    /// - `Err(DbErr)` - Database error, or the shipping address could not be encoded
    pub async fn create(&self, param: CreateOrderParam) -> Result<OrderWithItems, DbErr> {
        let now = Utc::now();
        let shipping_address = serde_json::to_value(&param.shipping_address)
            .map_err(|e| DbErr::Custom(format!("Failed to encode shipping address: {}", e)))?;

        let order = entity::order::ActiveModel {
            order_number: ActiveValue::Set(param.order_number),
            user_id: ActiveValue::Set(param.user_id),
            status: ActiveValue::Set(OrderStatus::Pending),
            payment_method: ActiveValue::Set(param.payment_method),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            gateway_order_id: ActiveValue::Set(None),
            gateway_payment_id: ActiveValue::Set(None),
            subtotal: ActiveValue::Set(param.subtotal),
            discount: ActiveValue::Set(param.discount),
            shipping_fee: ActiveValue::Set(param.shipping_fee),
            total: ActiveValue::Set(param.total),
            offer_id: ActiveValue::Set(param.offer_id),
            shipping_address: ActiveValue::Set(shipping_address),
            delivered_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(param.items.len());
        for item in param.items {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(item.product_id),
                seller_id: ActiveValue::Set(item.seller_id),
                name: ActiveValue::Set(item.name),
                image: ActiveValue::Set(item.image),
                price: ActiveValue::Set(item.price),
                quantity: ActiveValue::Set(item.quantity),
                size: ActiveValue::Set(item.size),
                color: ActiveValue::Set(item.color),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok((order, items))
    }

    /// Finds an order with its line items.
    ///
    /// # Returns
    /// - `Ok(Some((order, items)))` - The order and its lines
    /// - `Ok(None)` - No order with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<OrderWithItems>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let items = self.items_for(&[order.id]).await?.remove(&order.id);

        Ok(Some((order, items.unwrap_or_default())))
    }

    /// Looks up a single line item together with its order.
    ///
    /// # Arguments
    /// - `item_id` - Order item id
    ///
    /// # Returns
    /// - `Ok(Some((item, order)))` - The line and the order it belongs to
    /// - `Ok(None)` - No such line
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_item(
        &self,
        item_id: i32,
    ) -> Result<Option<(entity::order_item::Model, entity::order::Model)>, DbErr> {
        let row = entity::prelude::OrderItem::find_by_id(item_id)
            .find_also_related(entity::prelude::Order)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(item, order)| order.map(|order| (item, order))))
    }

    /// One page of a customer's orders, newest first, with the total count.
    ///
    /// # Arguments
    /// - `user_id` - Customer whose orders to list
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders on this page with their items, and the overall count
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<OrderWithItems>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((self.attach_items(orders).await?, total))
    }

    /// One page of all orders, optionally filtered by status.
    ///
    /// # Arguments
    /// - `status` - Only orders in this status, or `None` for all
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders on this page with their items, and the overall count
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_all(
        &self,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<OrderWithItems>, u64), DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(status) = status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }
        let paginator = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((self.attach_items(orders).await?, total))
    }

    /// Orders containing the seller's items, newest first, each holding only those items.
    ///
    /// # Arguments
    /// - `seller_id` - Seller whose lines to collect
    ///
    /// # Returns
    /// - `Ok(Vec<(order, items)>)` - Orders with other sellers' lines left out
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_seller(&self, seller_id: i32) -> Result<Vec<OrderWithItems>, DbErr> {
        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::SellerId.eq(seller_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in items {
            by_order.entry(item.order_id).or_default().push(item);
        }

        let orders = entity::prelude::Order::find()
            .filter(entity::order::Column::Id.is_in(by_order.keys().copied().collect::<Vec<_>>()))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = by_order.remove(&order.id).unwrap_or_default();
                (order, items)
            })
            .collect())
    }

    /// Counts distinct orders with at least one line from the seller.
    pub async fn count_for_seller(&self, seller_id: i32) -> Result<u64, DbErr> {
        let order_ids: Vec<i32> = entity::prelude::OrderItem::find()
            .select_only()
            .column(entity::order_item::Column::OrderId)
            .distinct()
            .filter(entity::order_item::Column::SellerId.eq(seller_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;
        Ok(order_ids.len() as u64)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Order::find().count(self.db).await
    }

    /// Sum of totals of orders whose payment has been captured.
    ///
    /// # Returns
    /// - `Ok(i64)` - Revenue in minor units, `0` when nothing has been paid
    /// - `Err(DbErr)` - Database error during query
    pub async fn paid_revenue(&self) -> Result<i64, DbErr> {
        let total = entity::prelude::Order::find()
            .select_only()
            .column_as(entity::order::Column::Total.sum(), "revenue")
            .filter(entity::order::Column::PaymentStatus.eq(PaymentStatus::Paid))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;
        Ok(total.flatten().unwrap_or(0))
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<OrderWithItems>, DbErr> {
        let orders = entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;
        self.attach_items(orders).await
    }

    pub async fn set_gateway_order_id(
        &self,
        order: entity::order::Model,
        gateway_order_id: String,
    ) -> Result<entity::order::Model, DbErr> {
        let mut active = order.into_active_model();
        active.gateway_order_id = ActiveValue::Set(Some(gateway_order_id));
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Sets the payment status, recording the gateway payment id when given.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `payment_status` - New payment status
    /// - `gateway_payment_id` - Payment id reported by the gateway, left unchanged when `None`
    ///
    /// # Returns
    /// - `Ok(())` - Update issued; a missing order is not an error
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_payment_status(
        &self,
        id: i32,
        payment_status: PaymentStatus,
        gateway_payment_id: Option<String>,
    ) -> Result<(), DbErr> {
        let mut update = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::PaymentStatus,
                Expr::value(payment_status.to_value()),
            )
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(payment_id) = gateway_payment_id {
            update = update.col_expr(
                entity::order::Column::GatewayPaymentId,
                Expr::value(payment_id),
            );
        }
        update
            .filter(entity::order::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Moves an order from `from` to `to`, only if it is still in `from`.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `from` - Status the order is expected to be in
    /// - `to` - Status to move to
    /// - `delivered_at` - Delivery time, set only when moving to `delivered`
    ///
    /// # Returns
    /// - `Ok(true)` - The order moved
    /// - `Ok(false)` - Another request changed the status first
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition(
        &self,
        id: i32,
        from: OrderStatus,
        to: OrderStatus,
        delivered_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Status, Expr::value(to.to_value()))
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(delivered_at) = delivered_at {
            update = update.col_expr(
                entity::order::Column::DeliveredAt,
                Expr::value(delivered_at),
            );
        }
        let result = update
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::Status.eq(from))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }

    async fn attach_items(
        &self,
        orders: Vec<entity::order::Model>,
    ) -> Result<Vec<OrderWithItems>, DbErr> {
        let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let mut items = self.items_for(&ids).await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let order_items = items.remove(&order.id).unwrap_or_default();
                (order, order_items)
            })
            .collect())
    }

    async fn items_for(
        &self,
        order_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::order_item::Model>>, DbErr> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids.to_vec()))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in items {
            grouped.entry(item.order_id).or_default().push(item);
        }
        Ok(grouped)
    }
}
