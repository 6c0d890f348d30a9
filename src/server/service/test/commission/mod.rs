use crate::server::{
    data::return_request::ReturnRepository,
    error::AppError,
    model::{commission::CommissionStatus, return_request::CreateReturnParam},
    service::{commission::CommissionService, wallet::WalletService},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, factory::helpers};

mod adjust_for_refund;
mod settle;
mod settle_all;
