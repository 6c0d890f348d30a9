use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{payout::PayoutRepository, seller::SellerRepository},
    error::AppError,
    model::{
        notification::{CreateNotificationParam, NotificationKind},
        seller::Seller,
        wallet::{Payout, PayoutStatus},
    },
    service::{notification::NotificationService, wallet::WalletService},
};

pub struct PayoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PayoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests a payout, debiting the seller's wallet right away.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Amount not positive or above the wallet balance
    pub async fn request(&self, seller: &Seller, amount: i64) -> Result<Payout, AppError> {
        let repo = PayoutRepository::new(self.db);

        if amount <= 0 {
            return Err(AppError::bad_request("Payout amount must be greater than zero"));
        }
        WalletService::new(self.db)
            .debit(seller.user_id, amount, "Payout request", None)
            .await?;

        let payout = Payout::from_entity(repo.create(seller.id, amount).await?);
        tracing::info!("Seller {} requested payout {} of {}", seller.id, payout.id, amount);

        Ok(payout)
    }

    /// Lists payouts newest first, optionally for one seller or status.
    pub async fn list(
        &self,
        seller_id: Option<i32>,
        status: Option<PayoutStatus>,
    ) -> Result<Vec<Payout>, AppError> {
        let repo = PayoutRepository::new(self.db);

        let payouts = repo.list(seller_id, status).await?;

        Ok(payouts.into_iter().map(Payout::from_entity).collect())
    }

    /// Marks a requested payout paid with the bank transfer reference.
    pub async fn complete(&self, id: i32, reference: String) -> Result<Payout, AppError> {
        let reference = reference.trim().to_string();
        if reference.is_empty() {
            return Err(AppError::bad_request("Payment reference is required"));
        }

        let payout = self
            .process(id, PayoutStatus::Paid, Some(reference), None)
            .await?;
        self.notify_seller(
            &payout,
            format!("Your payout of {} has been paid", payout.amount),
        )
        .await?;

        Ok(payout)
    }

    /// Rejects a requested payout and returns the amount to the seller's wallet.
    pub async fn reject(&self, id: i32, reason: Option<String>) -> Result<Payout, AppError> {
        let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());

        let payout = self
            .process(id, PayoutStatus::Rejected, None, reason.clone())
            .await?;
        let seller = self.seller(payout.seller_id).await?;
        WalletService::new(self.db)
            .credit(
                seller.user_id,
                payout.amount,
                "Payout rejected",
                Some(format!("payout:{}", payout.id)),
            )
            .await?;

        let message = match reason {
            Some(reason) => format!(
                "Your payout of {} was rejected and returned to your wallet: {}",
                payout.amount, reason
            ),
            None => format!(
                "Your payout of {} was rejected and returned to your wallet",
                payout.amount
            ),
        };
        self.notify_seller(&payout, message).await?;

        Ok(payout)
    }

    async fn process(
        &self,
        id: i32,
        status: PayoutStatus,
        reference: Option<String>,
        note: Option<String>,
    ) -> Result<Payout, AppError> {
        let repo = PayoutRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Payout not found"));
        }
        if !repo.process(id, status, reference, note).await? {
            return Err(AppError::bad_request("Only requested payouts can be processed"));
        }
        tracing::info!("Payout {} is now {}", id, status.to_value());

        match repo.find_by_id(id).await? {
            Some(payout) => Ok(Payout::from_entity(payout)),
            None => Err(AppError::not_found("Payout not found")),
        }
    }

    async fn seller(&self, seller_id: i32) -> Result<Seller, AppError> {
        match SellerRepository::new(self.db).find_by_id(seller_id).await? {
            Some(seller) => Ok(Seller::from_entity(seller)),
            None => Err(AppError::not_found("Seller not found")),
        }
    }

    async fn notify_seller(&self, payout: &Payout, message: String) -> Result<(), AppError> {
        let seller = self.seller(payout.seller_id).await?;

        NotificationService::new(self.db)
            .notify(CreateNotificationParam::new(
                seller.user_id,
                NotificationKind::Payout,
                "Payout update",
                message,
            ))
            .await?;

        Ok(())
    }
}
