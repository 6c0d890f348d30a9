use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OfferDto {
    pub id: i32,
    pub code: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// `percentage`, `fixed`, `bogo` or `free_shipping`.
    pub offer_type: String,
    pub value: i64,
    pub min_order_value: i64,
    pub max_discount: Option<i64>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub usage_limit: Option<i32>,
    pub used_count: i32,
    pub is_automatic: bool,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateOfferDto {
    pub code: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub offer_type: String,
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub min_order_value: i64,
    pub max_discount: Option<i64>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub usage_limit: Option<i32>,
    #[serde(default)]
    pub is_automatic: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateOfferDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub value: Option<i64>,
    pub min_order_value: Option<i64>,
    pub max_discount: Option<i64>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub usage_limit: Option<i32>,
    pub is_automatic: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ValidateOfferDto {
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OfferValidationDto {
    pub offer: OfferDto,
    pub subtotal: i64,
    pub discount: i64,
    pub free_shipping: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FlashSaleDto {
    pub id: i32,
    pub title: String,
    pub discount_percent: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
    pub product_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateFlashSaleDto {
    pub title: String,
    pub discount_percent: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub product_ids: Vec<i32>,
}
