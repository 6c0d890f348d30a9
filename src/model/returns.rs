use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateReturnDto {
    pub order_item_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    pub reason: String,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReturnDto {
    pub id: i32,
    pub order_id: i32,
    pub order_item_id: i32,
    pub user_id: i32,
    pub seller_id: Option<i32>,
    pub quantity: i32,
    pub reason: String,
    /// `requested`, `approved`, `rejected`, `picked_up` or `refunded`.
    pub status: String,
    pub refund_amount: Option<i64>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct ReturnNoteDto {
    #[serde(default)]
    pub note: Option<String>,
}
