//! Customer return requests.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::model::returns::ReturnDto;

pub use entity::return_request::ReturnStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnRequest {
    pub id: i32,
    pub order_id: i32,
    pub order_item_id: i32,
    pub user_id: i32,
    pub seller_id: Option<i32>,
    pub quantity: i32,
    pub reason: String,
    pub status: ReturnStatus,
    pub refund_amount: Option<i64>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReturnRequest {
    pub fn from_entity(entity: entity::return_request::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            order_item_id: entity.order_item_id,
            user_id: entity.user_id,
            seller_id: entity.seller_id,
            quantity: entity.quantity,
            reason: entity.reason,
            status: entity.status,
            refund_amount: entity.refund_amount,
            note: entity.note,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReturnDto {
        ReturnDto {
            id: self.id,
            order_id: self.order_id,
            order_item_id: self.order_item_id,
            user_id: self.user_id,
            seller_id: self.seller_id,
            quantity: self.quantity,
            reason: self.reason,
            status: self.status.to_value(),
            refund_amount: self.refund_amount,
            note: self.note,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReturnParam {
    pub order_id: i32,
    pub order_item_id: i32,
    pub user_id: i32,
    pub seller_id: Option<i32>,
    pub quantity: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReturnFilter {
    pub user_id: Option<i32>,
    pub seller_id: Option<i32>,
    pub status: Option<ReturnStatus>,
}
