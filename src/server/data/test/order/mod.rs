use crate::server::{
    data::order::OrderRepository,
    model::order::{
        CreateOrderParam, NewOrderItem, OrderStatus, PaymentMethod, ShippingAddress,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers};

mod create;
mod list_for_seller;
mod transition;

fn address() -> ShippingAddress {
    serde_json::from_value(test_utils::fixture::address::json()).unwrap()
}
