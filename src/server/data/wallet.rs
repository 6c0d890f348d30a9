//! Wallet repository.
//!
//! Every balance change is written together with a ledger row in `wallet_transaction`.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::wallet::LedgerEntry;

/// Repository providing database operations for wallets and their ledger.
pub struct WalletRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletRepository<'a> {
    /// Creates a new WalletRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `WalletRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<entity::wallet::Model>, DbErr> {
        entity::prelude::Wallet::find()
            .filter(entity::wallet::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns the user's wallet, creating an empty one on first use.
    ///
    /// # Arguments
    /// - `user_id` - Wallet owner
    ///
    /// # Returns
    /// - `Ok(Model)` - The existing or newly created wallet
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn get_or_create(&self, user_id: i32) -> Result<entity::wallet::Model, DbErr> {
        if let Some(wallet) = self.find_by_user(user_id).await? {
            return Ok(wallet);
        }

        let inserted = entity::wallet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            balance: ActiveValue::Set(0),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(wallet) => Ok(wallet),
            // Lost a race with a concurrent insert on the unique user_id
            Err(err) => match self.find_by_user(user_id).await? {
                Some(wallet) => Ok(wallet),
                None => Err(err),
            },
        }
    }

    /// Applies a ledger entry to the user's wallet.
    ///
    /// Debits are guarded so the balance cannot drop below zero.
    ///
    /// # Arguments
    /// - `user_id` - Wallet owner
    /// - `entry` - Signed amount with its description and reference
    ///
    /// # Returns
    /// - `Ok(true)` - Balance changed and the entry was recorded
    /// - `Ok(false)` - Insufficient balance; nothing was written
    /// - `Err(DbErr)` - Database error during update or insert
    pub async fn apply(&self, user_id: i32, entry: LedgerEntry) -> Result<bool, DbErr> {
        use entity::wallet::Column;

        let wallet = self.get_or_create(user_id).await?;

        let mut update = entity::prelude::Wallet::update_many()
            .col_expr(Column::Balance, Expr::col(Column::Balance).add(entry.amount))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(wallet.id));
        if entry.amount < 0 {
            update = update.filter(Column::Balance.gte(-entry.amount));
        }
        let result = update.exec(self.db).await?;
        if result.rows_affected != 1 {
            return Ok(false);
        }

        self.record(wallet.id, entry).await?;

        Ok(true)
    }

    /// Applies an entry even if it takes the balance negative. Used for settlement claw-backs.
    ///
    /// # Arguments
    /// - `user_id` - Wallet owner
    /// - `entry` - Signed amount with its description and reference
    ///
    /// # Returns
    /// - `Ok(())` - Balance changed and the entry was recorded
    /// - `Err(DbErr)` - Database error during update or insert
    pub async fn force_apply(&self, user_id: i32, entry: LedgerEntry) -> Result<(), DbErr> {
        use entity::wallet::Column;

        let wallet = self.get_or_create(user_id).await?;
        entity::prelude::Wallet::update_many()
            .col_expr(Column::Balance, Expr::col(Column::Balance).add(entry.amount))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(wallet.id))
            .exec(self.db)
            .await?;

        self.record(wallet.id, entry).await?;

        Ok(())
    }

    /// Most recent ledger entries, newest first.
    ///
    /// # Arguments
    /// - `wallet_id` - Wallet whose ledger to read
    /// - `limit` - Maximum number of entries
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Ledger entries
    /// - `Err(DbErr)` - Database error during query
    pub async fn transactions(
        &self,
        wallet_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::wallet_transaction::Model>, DbErr> {
        entity::prelude::WalletTransaction::find()
            .filter(entity::wallet_transaction::Column::WalletId.eq(wallet_id))
            .order_by_desc(entity::wallet_transaction::Column::CreatedAt)
            .order_by_desc(entity::wallet_transaction::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    async fn record(
        &self,
        wallet_id: i32,
        entry: LedgerEntry,
    ) -> Result<entity::wallet_transaction::Model, DbErr> {
        entity::wallet_transaction::ActiveModel {
            wallet_id: ActiveValue::Set(wallet_id),
            amount: ActiveValue::Set(entry.amount),
            kind: ActiveValue::Set(entry.kind()),
            description: ActiveValue::Set(entry.description),
            reference: ActiveValue::Set(entry.reference),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
