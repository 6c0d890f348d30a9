use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One cart line as captured when the cart was last touched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AbandonedCartItemDto {
    pub product_id: i32,
    pub name: String,
    pub image: Option<String>,
    pub unit_price: i64,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AbandonedCartDto {
    pub items: Vec<AbandonedCartItemDto>,
    pub total: i64,
    pub item_count: i32,
    pub last_activity_at: DateTime<Utc>,
}
