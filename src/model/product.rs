use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub seller_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub gender: String,
    pub price: i64,
    /// Price after the best active flash sale, equal to `price` when none applies.
    pub effective_price: i64,
    pub mrp: i64,
    /// Percentage off MRP at the effective price, rounded down.
    pub discount_percent: i64,
    pub stock: i32,
    pub in_stock: bool,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub images: Vec<String>,
    pub status: String,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact product card used inside carts, wishlists and chat suggestions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProductSummaryDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub effective_price: i64,
    pub mrp: i64,
    pub image: Option<String>,
    pub in_stock: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PaginatedProductsDto {
    pub products: Vec<ProductDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateProductDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub brand: String,
    pub category: String,
    pub gender: String,
    pub price: i64,
    pub mrp: i64,
    pub stock: i32,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Owner when an admin creates a product on a seller's behalf.
    #[serde(default)]
    pub seller_id: Option<i32>,
}

/// Partial update; omitted fields keep their value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub gender: Option<String>,
    pub price: Option<i64>,
    pub mrp: Option<i64>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    /// `active` or `archived`.
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateReviewDto {
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
