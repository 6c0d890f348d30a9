use crate::server::{
    error::AppError,
    model::{abandoned_cart::AbandonedCartStatus, cart::AddCartItemParam},
    service::cart::CartService,
};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod update_quantity;

fn add_param(product_id: i32, quantity: i32) -> AddCartItemParam {
    AddCartItemParam {
        product_id,
        quantity,
        size: Some("M".to_string()),
        color: Some("black".to_string()),
    }
}
