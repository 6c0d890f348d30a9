use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::order::OrderDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AdminStatsDto {
    pub users: u64,
    pub customers: u64,
    pub sellers: u64,
    pub pending_sellers: u64,
    pub active_products: u64,
    pub orders: u64,
    /// Sum of totals of paid orders.
    pub revenue: i64,
    /// Sum of platform fees on commissions that were not reversed.
    pub platform_earnings: i64,
    pub open_returns: u64,
    pub requested_payouts: i64,
    pub recent_orders: Vec<OrderDto>,
}
