use crate::server::{
    error::AppError,
    model::{seller::Seller, wallet::PayoutStatus},
    service::{payout::PayoutService, wallet::WalletService},
};
use test_utils::{builder::TestBuilder, factory};

mod reject;
mod request;
