use crate::server::{
    error::AppError,
    model::{product::ProductStatus, user::User},
    service::product::ProductService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, product::ProductFactory},
};

mod add_review;
