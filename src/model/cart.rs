use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::ProductSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AddCartItemDto {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateCartItemDto {
    /// New quantity; 0 removes the line.
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CartItemDto {
    pub id: i32,
    pub product: ProductSummaryDto,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub unit_price: i64,
    pub line_total: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CartDto {
    pub items: Vec<CartItemDto>,
    pub subtotal: i64,
    pub item_count: i32,
}
