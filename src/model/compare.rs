use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AddCompareItemDto {
    pub product_id: i32,
}

/// One column of the comparison table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CompareProductDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub image: Option<String>,
    pub price: i64,
    pub effective_price: i64,
    pub mrp: i64,
    pub discount_percent: i64,
    pub rating: f64,
    pub review_count: i32,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CompareDto {
    pub products: Vec<CompareProductDto>,
    pub max_items: usize,
}
