use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CommissionDto {
    pub id: i32,
    pub order_id: i32,
    pub order_item_id: i32,
    pub seller_id: i32,
    pub quantity: i32,
    pub amount: i64,
    pub rate_bps: i32,
    pub platform_fee: i64,
    pub seller_earning: i64,
    /// `pending`, `eligible`, `settled` or `reversed`.
    pub status: String,
    pub final_settlement: Option<i64>,
    pub settled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SettlementDto {
    pub settled_count: u64,
    pub settled_total: i64,
}
