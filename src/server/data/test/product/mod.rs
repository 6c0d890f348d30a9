use crate::server::{
    data::product::ProductRepository,
    model::product::{ProductFilter, ProductSort, ProductStatus},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod decrement_stock;
mod list;
