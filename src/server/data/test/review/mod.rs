use crate::server::data::review::ReviewRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_by_product;
