//! Snapshots of idle carts used for recovery reminders.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::abandoned_cart::{AbandonedCartDto, AbandonedCartItemDto},
    server::{
        error::AppError,
        model::{cart::Cart, from_json_column},
    },
};

pub use entity::abandoned_cart::AbandonedCartStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbandonedCartItem {
    pub product_id: i32,
    pub name: String,
    pub image: Option<String>,
    pub unit_price: i64,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl AbandonedCartItem {
    pub fn into_dto(self) -> AbandonedCartItemDto {
        AbandonedCartItemDto {
            product_id: self.product_id,
            name: self.name,
            image: self.image,
            unit_price: self.unit_price,
            quantity: self.quantity,
            size: self.size,
            color: self.color,
        }
    }
}

/// Snapshot of a cart's lines.
pub fn snapshot(cart: &Cart) -> Vec<AbandonedCartItem> {
    cart.lines
        .iter()
        .map(|line| AbandonedCartItem {
            product_id: line.product.id,
            name: line.product.name.clone(),
            image: line.product.first_image(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            size: line.size.clone(),
            color: line.color.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbandonedCart {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<AbandonedCartItem>,
    pub total: i64,
    pub status: AbandonedCartStatus,
    pub reminder_count: i32,
    pub last_reminded_at: Option<DateTime<Utc>>,
    pub last_activity_at: DateTime<Utc>,
}

impl AbandonedCart {
    pub fn from_entity(entity: entity::abandoned_cart::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            items: from_json_column("abandoned_cart.items", entity.items)?,
            total: entity.total,
            status: entity.status,
            reminder_count: entity.reminder_count,
            last_reminded_at: entity.last_reminded_at,
            last_activity_at: entity.last_activity_at,
        })
    }

    pub fn is_idle(&self, now: DateTime<Utc>, idle: Duration) -> bool {
        now - self.last_activity_at >= idle
    }

    /// Whether the recovery job should email this cart now.
    pub fn is_due_for_reminder(
        &self,
        now: DateTime<Utc>,
        idle: Duration,
        max_reminders: i32,
    ) -> bool {
        self.status == AbandonedCartStatus::Active
            && !self.items.is_empty()
            && self.is_idle(now, idle)
            && self.reminder_count < max_reminders
            && self
                .last_reminded_at
                .is_none_or(|reminded| now - reminded >= idle)
    }

    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn into_dto(self) -> AbandonedCartDto {
        let item_count = self.item_count();
        AbandonedCartDto {
            items: self
                .items
                .into_iter()
                .map(AbandonedCartItem::into_dto)
                .collect(),
            total: self.total,
            item_count,
            last_activity_at: self.last_activity_at,
        }
    }
}
