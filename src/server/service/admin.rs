use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        commission::CommissionRepository, order::OrderRepository, payout::PayoutRepository,
        product::ProductRepository, return_request::ReturnRepository, seller::SellerRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        admin::{AdminStats, RECENT_ORDERS},
        order::Order,
        seller::SellerStatus,
        user::Role,
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gathers the back-office overview.
    pub async fn stats(&self) -> Result<AdminStats, AppError> {
        let user_repo = UserRepository::new(self.db);
        let seller_repo = SellerRepository::new(self.db);
        let order_repo = OrderRepository::new(self.db);

        let recent_orders = order_repo
            .recent(RECENT_ORDERS)
            .await?
            .into_iter()
            .map(|(order, items)| Order::from_entity(order, items))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AdminStats {
            users: user_repo.count(None).await?,
            customers: user_repo.count(Some(Role::Customer)).await?,
            sellers: seller_repo.count(None).await?,
            pending_sellers: seller_repo.count(Some(SellerStatus::Pending)).await?,
            active_products: ProductRepository::new(self.db).count_active().await?,
            orders: order_repo.count().await?,
            revenue: order_repo.paid_revenue().await?,
            platform_earnings: CommissionRepository::new(self.db)
                .platform_earnings()
                .await?,
            open_returns: ReturnRepository::new(self.db).count_open().await?,
            requested_payouts: PayoutRepository::new(self.db).requested_total().await?,
            recent_orders,
        })
    }
}
