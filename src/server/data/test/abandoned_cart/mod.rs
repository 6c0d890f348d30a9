use crate::server::{
    data::abandoned_cart::AbandonedCartRepository,
    model::abandoned_cart::{AbandonedCartItem, AbandonedCartStatus},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list_idle;
mod upsert;

fn item(product_id: i32, quantity: i32) -> AbandonedCartItem {
    AbandonedCartItem {
        product_id,
        name: "Linen Shirt".to_string(),
        image: None,
        unit_price: 149_900,
        quantity,
        size: Some("M".to_string()),
        color: None,
    }
}
