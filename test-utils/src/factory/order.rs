//! Order and order item factories.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::order::{OrderStatus, PaymentMethod, PaymentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders directly, bypassing checkout.
///
/// Defaults to a confirmed, paid online order of 99,900 with no discount or shipping.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    status: OrderStatus,
    payment_method: PaymentMethod,
    payment_status: PaymentStatus,
    gateway_order_id: Option<String>,
    subtotal: i64,
    discount: i64,
    shipping_fee: i64,
    delivered_at: Option<DateTime<Utc>>,
}

impl<'a> OrderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            status: OrderStatus::Confirmed,
            payment_method: PaymentMethod::Online,
            payment_status: PaymentStatus::Paid,
            gateway_order_id: None,
            subtotal: 99_900,
            discount: 0,
            shipping_fee: 0,
            delivered_at: None,
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    pub fn gateway_order_id(mut self, gateway_order_id: Option<String>) -> Self {
        self.gateway_order_id = gateway_order_id;
        self
    }

    /// Sets subtotal, discount and shipping; the total is derived from them.
    pub fn amounts(mut self, subtotal: i64, discount: i64, shipping_fee: i64) -> Self {
        self.subtotal = subtotal;
        self.discount = discount;
        self.shipping_fee = shipping_fee;
        self
    }

    pub fn delivered_at(mut self, delivered_at: Option<DateTime<Utc>>) -> Self {
        self.delivered_at = delivered_at;
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            order_number: ActiveValue::Set(format!("TLTEST{:06}", next_id())),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            payment_method: ActiveValue::Set(self.payment_method),
            payment_status: ActiveValue::Set(self.payment_status),
            gateway_order_id: ActiveValue::Set(self.gateway_order_id),
            gateway_payment_id: ActiveValue::Set(None),
            subtotal: ActiveValue::Set(self.subtotal),
            discount: ActiveValue::Set(self.discount),
            shipping_fee: ActiveValue::Set(self.shipping_fee),
            total: ActiveValue::Set(self.subtotal - self.discount + self.shipping_fee),
            offer_id: ActiveValue::Set(None),
            shipping_address: ActiveValue::Set(crate::fixture::address::json()),
            delivered_at: ActiveValue::Set(self.delivered_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Factory for order lines. Snapshots name, price and seller from the product.
pub struct OrderItemFactory<'a> {
    db: &'a DatabaseConnection,
    order_id: i32,
    product_id: i32,
    seller_id: Option<i32>,
    name: String,
    price: i64,
    quantity: i32,
}

impl<'a> OrderItemFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        order_id: i32,
        product: &entity::product::Model,
    ) -> Self {
        Self {
            db,
            order_id,
            product_id: product.id,
            seller_id: product.seller_id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub async fn build(self) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(self.order_id),
            product_id: ActiveValue::Set(self.product_id),
            seller_id: ActiveValue::Set(self.seller_id),
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
            quantity: ActiveValue::Set(self.quantity),
            size: ActiveValue::Set(Some("M".to_string())),
            color: ActiveValue::Set(Some("black".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed, paid order for `user_id`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Creates a single-unit line of `product` on `order_id`.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    product: &entity::product::Model,
) -> Result<entity::order_item::Model, DbErr> {
    OrderItemFactory::new(db, order_id, product).build().await
}
