use sea_orm::DatabaseConnection;

use crate::server::{
    data::wallet::WalletRepository,
    error::AppError,
    model::wallet::{LedgerEntry, Wallet, WalletTransaction, RECENT_TRANSACTIONS},
};

pub struct WalletService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's balance and latest ledger entries, opening the wallet on first use.
    pub async fn wallet(&self, user_id: i32) -> Result<Wallet, AppError> {
        let repo = WalletRepository::new(self.db);

        let wallet = repo.get_or_create(user_id).await?;
        let transactions = repo
            .transactions(wallet.id, RECENT_TRANSACTIONS)
            .await?
            .into_iter()
            .map(WalletTransaction::from_entity)
            .collect();

        Ok(Wallet {
            id: wallet.id,
            user_id: wallet.user_id,
            balance: wallet.balance,
            transactions,
        })
    }

    pub async fn credit(
        &self,
        user_id: i32,
        amount: i64,
        description: impl Into<String>,
        reference: Option<String>,
    ) -> Result<(), AppError> {
        let repo = WalletRepository::new(self.db);

        repo.force_apply(user_id, LedgerEntry::credit(amount, description, reference))
            .await?;

        Ok(())
    }

    /// Debits the wallet only if the balance covers it.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Insufficient balance
    pub async fn debit(
        &self,
        user_id: i32,
        amount: i64,
        description: impl Into<String>,
        reference: Option<String>,
    ) -> Result<(), AppError> {
        let repo = WalletRepository::new(self.db);

        if !repo
            .apply(user_id, LedgerEntry::debit(amount, description, reference))
            .await?
        {
            return Err(AppError::bad_request("Insufficient wallet balance"));
        }

        Ok(())
    }

    /// Takes money back even when the balance goes negative.
    pub async fn claw_back(
        &self,
        user_id: i32,
        amount: i64,
        description: impl Into<String>,
        reference: Option<String>,
    ) -> Result<(), AppError> {
        let repo = WalletRepository::new(self.db);

        repo.force_apply(user_id, LedgerEntry::debit(amount, description, reference))
            .await?;

        Ok(())
    }
}
