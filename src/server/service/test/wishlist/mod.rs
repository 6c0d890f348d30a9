use crate::server::{error::AppError, service::wishlist::WishlistService};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod move_to_cart;
