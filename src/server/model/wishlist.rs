//! Saved-for-later products.

use chrono::{DateTime, Utc};

use crate::{model::wishlist::WishlistItemDto, server::model::product::Product};

#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub product: Product,
    pub effective_price: i64,
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    pub fn into_dto(self) -> WishlistItemDto {
        WishlistItemDto {
            product: self.product.summary(self.effective_price),
            added_at: self.added_at,
        }
    }
}
