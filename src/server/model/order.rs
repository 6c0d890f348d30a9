//! Orders, their line items and lifecycle rules.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        checkout::ShippingAddressDto,
        order::{OrderDto, OrderItemDto, PaginatedOrdersDto},
    },
    server::{error::AppError, model::from_json_column, util::pagination::total_pages},
};

pub use entity::order::{OrderStatus, PaymentMethod, PaymentStatus};

/// Delivery address stored as JSON on the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub phone: String,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl ShippingAddress {
    pub fn from_dto(dto: ShippingAddressDto) -> Result<Self, AppError> {
        let address = Self {
            name: dto.name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            line1: dto.line1.trim().to_string(),
            line2: dto
                .line2
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            city: dto.city.trim().to_string(),
            state: dto.state.trim().to_string(),
            pincode: dto.pincode.trim().to_string(),
        };

        let required = [
            ("name", &address.name),
            ("phone", &address.phone),
            ("line1", &address.line1),
            ("city", &address.city),
            ("state", &address.state),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(AppError::bad_request(format!(
                "Shipping address {field} is required"
            )));
        }
        if address.pincode.len() != 6 || !address.pincode.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::bad_request("Pincode must be 6 digits"));
        }

        Ok(address)
    }

    pub fn into_dto(self) -> ShippingAddressDto {
        ShippingAddressDto {
            name: self.name,
            phone: self.phone,
            line1: self.line1,
            line2: self.line2,
            city: self.city,
            state: self.state,
            pincode: self.pincode,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub seller_id: Option<i32>,
    pub name: String,
    pub image: Option<String>,
    pub price: i64,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            product_id: entity.product_id,
            seller_id: entity.seller_id,
            name: entity.name,
            image: entity.image,
            price: entity.price,
            quantity: entity.quantity,
            size: entity.size,
            color: entity.color,
        }
    }

    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }

    pub fn into_dto(self) -> OrderItemDto {
        let line_total = self.line_total();
        OrderItemDto {
            id: self.id,
            product_id: self.product_id,
            seller_id: self.seller_id,
            name: self.name,
            image: self.image,
            price: self.price,
            quantity: self.quantity,
            size: self.size,
            color: self.color,
            line_total,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_number: String,
    pub user_id: i32,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub subtotal: i64,
    pub discount: i64,
    pub shipping_fee: i64,
    pub total: i64,
    pub offer_id: Option<i32>,
    pub shipping_address: ShippingAddress,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            order_number: entity.order_number,
            user_id: entity.user_id,
            status: entity.status,
            payment_method: entity.payment_method,
            payment_status: entity.payment_status,
            gateway_order_id: entity.gateway_order_id,
            gateway_payment_id: entity.gateway_payment_id,
            subtotal: entity.subtotal,
            discount: entity.discount,
            shipping_fee: entity.shipping_fee,
            total: entity.total,
            offer_id: entity.offer_id,
            shipping_address: from_json_column("orders.shipping_address", entity.shipping_address)?,
            delivered_at: entity.delivered_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_number: self.order_number,
            user_id: self.user_id,
            status: self.status.to_value(),
            payment_method: self.payment_method.to_value(),
            payment_status: self.payment_status.to_value(),
            gateway_order_id: self.gateway_order_id,
            subtotal: self.subtotal,
            discount: self.discount,
            shipping_fee: self.shipping_fee,
            total: self.total,
            shipping_address: self.shipping_address.into_dto(),
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            delivered_at: self.delivered_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl OrderPage {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: total_pages(self.total, self.per_page),
        }
    }
}

/// Line snapshot taken from the cart when the order is placed.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i32,
    pub seller_id: Option<i32>,
    pub name: String,
    pub image: Option<String>,
    pub price: i64,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub order_number: String,
    pub user_id: i32,
    pub payment_method: PaymentMethod,
    pub subtotal: i64,
    pub discount: i64,
    pub shipping_fee: i64,
    pub total: i64,
    pub offer_id: Option<i32>,
    pub shipping_address: ShippingAddress,
    pub items: Vec<NewOrderItem>,
}
