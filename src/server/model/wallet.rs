//! Wallet balances, their ledger and seller payouts.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::model::wallet::{PayoutDto, WalletDto, WalletTransactionDto};

pub use entity::{payout::PayoutStatus, wallet_transaction::TransactionKind};

/// Number of ledger entries returned with a wallet.
pub const RECENT_TRANSACTIONS: u64 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    pub id: i32,
    pub wallet_id: i32,
    pub amount: i64,
    pub kind: TransactionKind,
    pub description: String,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WalletTransaction {
    pub fn from_entity(entity: entity::wallet_transaction::Model) -> Self {
        Self {
            id: entity.id,
            wallet_id: entity.wallet_id,
            amount: entity.amount,
            kind: entity.kind,
            description: entity.description,
            reference: entity.reference,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> WalletTransactionDto {
        WalletTransactionDto {
            id: self.id,
            amount: self.amount,
            kind: self.kind.to_value(),
            description: self.description,
            reference: self.reference,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    pub id: i32,
    pub user_id: i32,
    pub balance: i64,
    pub transactions: Vec<WalletTransaction>,
}

impl Wallet {
    pub fn into_dto(self) -> WalletDto {
        WalletDto {
            balance: self.balance,
            transactions: self
                .transactions
                .into_iter()
                .map(WalletTransaction::into_dto)
                .collect(),
        }
    }
}

/// A ledger movement. Positive amounts credit the wallet, negative amounts debit it.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub amount: i64,
    pub description: String,
    pub reference: Option<String>,
}

impl LedgerEntry {
    pub fn credit(amount: i64, description: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            amount: amount.abs(),
            description: description.into(),
            reference,
        }
    }

    pub fn debit(amount: i64, description: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            amount: -amount.abs(),
            description: description.into(),
            reference,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount < 0 {
            TransactionKind::Debit
        } else {
            TransactionKind::Credit
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payout {
    pub id: i32,
    pub seller_id: i32,
    pub amount: i64,
    pub status: PayoutStatus,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl Payout {
    pub fn from_entity(entity: entity::payout::Model) -> Self {
        Self {
            id: entity.id,
            seller_id: entity.seller_id,
            amount: entity.amount,
            status: entity.status,
            reference: entity.reference,
            note: entity.note,
            created_at: entity.created_at,
            processed_at: entity.processed_at,
        }
    }

    pub fn into_dto(self) -> PayoutDto {
        PayoutDto {
            id: self.id,
            seller_id: self.seller_id,
            amount: self.amount,
            status: self.status.to_value(),
            reference: self.reference,
            note: self.note,
            created_at: self.created_at,
            processed_at: self.processed_at,
        }
    }
}
