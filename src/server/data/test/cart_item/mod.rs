use crate::server::{data::cart_item::CartItemRepository, model::cart::AddCartItemParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_line;
mod list_by_user;
