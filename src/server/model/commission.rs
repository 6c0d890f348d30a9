//! Platform commission on seller-owned order items.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::model::commission::{CommissionDto, SettlementDto};

pub use entity::commission::CommissionStatus;

/// Platform fee for `amount` at `rate_bps`, rounded half up.
pub fn compute_fee(amount: i64, rate_bps: i32) -> i64 {
    (amount * i64::from(rate_bps) + 5_000) / 10_000
}

/// Amount, fee and earning for a number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionAmounts {
    pub quantity: i32,
    pub amount: i64,
    pub platform_fee: i64,
    pub seller_earning: i64,
}

impl CommissionAmounts {
    pub fn compute(unit_price: i64, quantity: i32, rate_bps: i32) -> Self {
        let amount = unit_price * i64::from(quantity);
        let platform_fee = compute_fee(amount, rate_bps);
        Self {
            quantity,
            amount,
            platform_fee,
            seller_earning: amount - platform_fee,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Commission {
    pub id: i32,
    pub order_id: i32,
    pub order_item_id: i32,
    pub seller_id: i32,
    pub quantity: i32,
    pub amount: i64,
    pub rate_bps: i32,
    pub platform_fee: i64,
    pub seller_earning: i64,
    pub status: CommissionStatus,
    pub final_settlement: Option<i64>,
    pub settled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Commission {
    pub fn from_entity(entity: entity::commission::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            order_item_id: entity.order_item_id,
            seller_id: entity.seller_id,
            quantity: entity.quantity,
            amount: entity.amount,
            rate_bps: entity.rate_bps,
            platform_fee: entity.platform_fee,
            seller_earning: entity.seller_earning,
            status: entity.status,
            final_settlement: entity.final_settlement,
            settled_at: entity.settled_at,
            created_at: entity.created_at,
        }
    }

    /// Amounts after `refunded` units come back.
    ///
    /// The unit price is recovered from the stored amount.
    pub fn after_refund(&self, refunded: i32) -> CommissionAmounts {
        let remaining = (self.quantity - refunded).max(0);
        let unit_price = if self.quantity > 0 {
            self.amount / i64::from(self.quantity)
        } else {
            0
        };
        CommissionAmounts::compute(unit_price, remaining, self.rate_bps)
    }

    pub fn into_dto(self) -> CommissionDto {
        CommissionDto {
            id: self.id,
            order_id: self.order_id,
            order_item_id: self.order_item_id,
            seller_id: self.seller_id,
            quantity: self.quantity,
            amount: self.amount,
            rate_bps: self.rate_bps,
            platform_fee: self.platform_fee,
            seller_earning: self.seller_earning,
            status: self.status.to_value(),
            final_settlement: self.final_settlement,
            settled_at: self.settled_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommissionParam {
    pub order_id: i32,
    pub order_item_id: i32,
    pub seller_id: i32,
    pub rate_bps: i32,
    pub amounts: CommissionAmounts,
}

#[derive(Debug, Clone, Default)]
pub struct CommissionFilter {
    pub seller_id: Option<i32>,
    pub status: Option<CommissionStatus>,
}

/// Result of a bulk settlement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settlement {
    pub settled_count: u64,
    pub settled_total: i64,
}

impl Settlement {
    pub fn record(&mut self, amount: i64) {
        self.settled_count += 1;
        self.settled_total += amount;
    }

    pub fn into_dto(self) -> SettlementDto {
        SettlementDto {
            settled_count: self.settled_count,
            settled_total: self.settled_total,
        }
    }
}
