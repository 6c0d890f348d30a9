use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WalletTransactionDto {
    pub id: i32,
    /// Signed; positive for credits.
    pub amount: i64,
    /// `credit` or `debit`.
    pub kind: String,
    pub description: String,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WalletDto {
    pub balance: i64,
    pub transactions: Vec<WalletTransactionDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PayoutDto {
    pub id: i32,
    pub seller_id: i32,
    pub amount: i64,
    /// `requested`, `paid` or `rejected`.
    pub status: String,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RequestPayoutDto {
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CompletePayoutDto {
    pub reference: String,
}
