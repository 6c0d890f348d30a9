use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::ProductSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AddWishlistItemDto {
    pub product_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WishlistItemDto {
    pub product: ProductSummaryDto,
    pub added_at: DateTime<Utc>,
}
