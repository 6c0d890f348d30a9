use crate::server::{
    error::AppError,
    model::{
        commission::CommissionStatus, order::OrderStatus, return_request::ReturnStatus,
        seller::OwnerScope,
    },
    service::{returns::ReturnService, wallet::WalletService},
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, factory::helpers};

mod approve;
mod create;
mod refund;

const WINDOW_DAYS: i64 = 7;
