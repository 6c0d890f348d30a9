use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{auth::UserDto, product::ProductSummaryDto};

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SellerRegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub store_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub business_id: Option<String>,
    #[serde(default)]
    pub pickup_address: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SellerDto {
    pub id: i32,
    pub user_id: i32,
    pub store_name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub business_id: Option<String>,
    pub pickup_address: Option<String>,
    /// `pending`, `approved`, `rejected` or `suspended`.
    pub status: String,
    pub status_note: Option<String>,
    pub commission_rate_bps: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SellerAuthResponseDto {
    pub token: String,
    pub user: UserDto,
    pub seller: SellerDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateSellerProfileDto {
    pub store_name: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub pickup_address: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SellerDashboardDto {
    pub product_count: u64,
    pub active_product_count: u64,
    pub order_count: u64,
    pub gross_sales: i64,
    pub pending_earnings: i64,
    pub settled_earnings: i64,
    pub wallet_balance: i64,
    pub low_stock: Vec<ProductSummaryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct ApproveSellerDto {
    /// Overrides the default commission rate, in basis points.
    #[serde(default)]
    pub commission_rate_bps: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CommissionRateDto {
    pub commission_rate_bps: i32,
}

/// Free-text reason attached to a rejection or suspension.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct ReasonDto {
    #[serde(default)]
    pub reason: Option<String>,
}
