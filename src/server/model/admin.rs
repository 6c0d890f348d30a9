//! Back-office overview figures.

use crate::{
    model::admin::AdminStatsDto,
    server::model::order::Order,
};

/// Number of orders shown on the overview.
pub const RECENT_ORDERS: u64 = 5;

#[derive(Debug, Clone)]
pub struct AdminStats {
    pub users: u64,
    pub customers: u64,
    pub sellers: u64,
    pub pending_sellers: u64,
    pub active_products: u64,
    pub orders: u64,
    pub revenue: i64,
    pub platform_earnings: i64,
    pub open_returns: u64,
    pub requested_payouts: i64,
    pub recent_orders: Vec<Order>,
}

impl AdminStats {
    pub fn into_dto(self) -> AdminStatsDto {
        AdminStatsDto {
            users: self.users,
            customers: self.customers,
            sellers: self.sellers,
            pending_sellers: self.pending_sellers,
            active_products: self.active_products,
            orders: self.orders,
            revenue: self.revenue,
            platform_earnings: self.platform_earnings,
            open_returns: self.open_returns,
            requested_payouts: self.requested_payouts,
            recent_orders: self.recent_orders.into_iter().map(Order::into_dto).collect(),
        }
    }
}
