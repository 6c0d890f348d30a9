use chrono::Utc;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    config::Config,
    data::{
        commission::CommissionRepository, return_request::ReturnRepository,
        seller::SellerRepository,
    },
    error::AppError,
    model::{
        commission::{
            Commission, CommissionAmounts, CommissionFilter, CommissionStatus,
            CreateCommissionParam, Settlement,
        },
        order::Order,
        seller::Seller,
    },
    service::wallet::WalletService,
};

pub struct CommissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pending commission for every seller-owned item of a confirmed order.
    ///
    /// Uses each seller's current rate; items that already have a commission are skipped.
    pub async fn record_for_order(&self, order: &Order, config: &Config) -> Result<(), AppError> {
        let repo = CommissionRepository::new(self.db);
        let seller_repo = SellerRepository::new(self.db);

        for item in &order.items {
            let Some(seller_id) = item.seller_id else {
                continue;
            };
            if repo.find_by_order_item(item.id).await?.is_some() {
                continue;
            }
            let rate_bps = match seller_repo.find_by_id(seller_id).await? {
                Some(seller) => seller.commission_rate_bps,
                None => {
                    tracing::warn!(
                        "Seller {} of order item {} not found; using default commission rate",
                        seller_id,
                        item.id
                    );
                    config.default_commission_bps
                }
            };

            repo.create(CreateCommissionParam {
                order_id: order.id,
                order_item_id: item.id,
                seller_id,
                rate_bps,
                amounts: CommissionAmounts::compute(item.price, item.quantity, rate_bps),
            })
            .await?;
        }

        Ok(())
    }

    /// Delivered orders make their pending commissions eligible for settlement.
    pub async fn mark_eligible(&self, order_id: i32) -> Result<u64, AppError> {
        let repo = CommissionRepository::new(self.db);

        Ok(repo
            .transition_for_order(order_id, CommissionStatus::Pending, CommissionStatus::Eligible)
            .await?)
    }

    /// Reverses the unsettled commissions of a cancelled order.
    pub async fn reverse_for_order(&self, order_id: i32) -> Result<u64, AppError> {
        let repo = CommissionRepository::new(self.db);

        let pending = repo
            .transition_for_order(order_id, CommissionStatus::Pending, CommissionStatus::Reversed)
            .await?;
        let eligible = repo
            .transition_for_order(order_id, CommissionStatus::Eligible, CommissionStatus::Reversed)
            .await?;

        Ok(pending + eligible)
    }

    pub async fn list(&self, filter: CommissionFilter) -> Result<Vec<Commission>, AppError> {
        let repo = CommissionRepository::new(self.db);

        let commissions = repo.list(filter).await?;

        Ok(commissions.into_iter().map(Commission::from_entity).collect())
    }

    /// Settles one eligible commission into the seller's wallet.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown commission
    /// - `Err(AppError::BadRequest)` - Not eligible, or a return on the item is still open
    pub async fn settle(&self, id: i32) -> Result<Commission, AppError> {
        let commission = self.find(id).await?;
        if commission.status != CommissionStatus::Eligible {
            return Err(AppError::bad_request(format!(
                "Only eligible commissions can be settled; this one is {}",
                commission.status.to_value()
            )));
        }
        if ReturnRepository::new(self.db)
            .has_open_for_item(commission.order_item_id)
            .await?
        {
            return Err(AppError::bad_request("A return for this item is still open"));
        }

        let seller = self.seller(commission.seller_id).await?;
        if !self.settle_one(&commission, &seller).await? {
            return Err(AppError::bad_request("Commission was already settled"));
        }

        self.find(id).await
    }

    /// Settles every eligible commission of a seller that has no open return.
    pub async fn settle_all(&self, seller_id: i32) -> Result<Settlement, AppError> {
        let return_repo = ReturnRepository::new(self.db);

        let seller = self.seller(seller_id).await?;
        let eligible = self
            .list(CommissionFilter {
                seller_id: Some(seller.id),
                status: Some(CommissionStatus::Eligible),
            })
            .await?;

        let mut settlement = Settlement::default();
        for commission in eligible {
            if return_repo.has_open_for_item(commission.order_item_id).await? {
                continue;
            }
            if self.settle_one(&commission, &seller).await? {
                settlement.record(commission.seller_earning);
            }
        }
        tracing::info!(
            "Settled {} commissions worth {} for seller {}",
            settlement.settled_count,
            settlement.settled_total,
            seller.id
        );

        Ok(settlement)
    }

    /// Recomputes an item's commission after `refunded` units came back.
    ///
    /// Unsettled commissions are reduced, or reversed when no units remain. A settled commission
    /// keeps its status and the earning difference is taken back from the seller's wallet.
    pub async fn adjust_for_refund(
        &self,
        order_item_id: i32,
        refunded: i32,
    ) -> Result<(), AppError> {
        let repo = CommissionRepository::new(self.db);

        let Some(commission) = repo.find_by_order_item(order_item_id).await? else {
            return Ok(());
        };
        let commission = Commission::from_entity(commission);
        let amounts = commission.after_refund(refunded);

        match commission.status {
            CommissionStatus::Reversed => {}
            CommissionStatus::Settled => {
                let settled = commission
                    .final_settlement
                    .unwrap_or(commission.seller_earning);
                let delta = settled - amounts.seller_earning;
                repo.adjust(
                    commission.id,
                    amounts,
                    CommissionStatus::Settled,
                    Some(amounts.seller_earning),
                )
                .await?;
                if delta > 0 {
                    let seller = self.seller(commission.seller_id).await?;
                    WalletService::new(self.db)
                        .claw_back(
                            seller.user_id,
                            delta,
                            "Refund adjustment",
                            Some(format!("commission:{}", commission.id)),
                        )
                        .await?;
                }
            }
            status => {
                let status = if amounts.quantity == 0 {
                    CommissionStatus::Reversed
                } else {
                    status
                };
                repo.adjust(commission.id, amounts, status, None).await?;
            }
        }

        Ok(())
    }

    /// Guarded settle plus wallet credit; `false` when another settle won.
    async fn settle_one(&self, commission: &Commission, seller: &Seller) -> Result<bool, AppError> {
        let repo = CommissionRepository::new(self.db);

        if !repo
            .settle(commission.id, commission.seller_earning, Utc::now())
            .await?
        {
            return Ok(false);
        }
        WalletService::new(self.db)
            .credit(
                seller.user_id,
                commission.seller_earning,
                format!("Settlement for order {}", commission.order_id),
                Some(format!("commission:{}", commission.id)),
            )
            .await?;

        Ok(true)
    }

    async fn find(&self, id: i32) -> Result<Commission, AppError> {
        match CommissionRepository::new(self.db).find_by_id(id).await? {
            Some(commission) => Ok(Commission::from_entity(commission)),
            None => Err(AppError::not_found("Commission not found")),
        }
    }

    async fn seller(&self, seller_id: i32) -> Result<Seller, AppError> {
        match SellerRepository::new(self.db).find_by_id(seller_id).await? {
            Some(seller) => Ok(Seller::from_entity(seller)),
            None => Err(AppError::not_found("Seller not found")),
        }
    }
}
