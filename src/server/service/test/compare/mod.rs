use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::{compare::MAX_COMPARE_ITEMS, product::ProductStatus},
    service::compare::CompareService,
};
use test_utils::{builder::TestBuilder, factory};

mod add;
