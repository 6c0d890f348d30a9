use crate::server::{
    error::AppError,
    model::{
        commission::CommissionStatus,
        order::{OrderStatus, PaymentMethod, PaymentStatus},
    },
    service::{order::OrderService, wallet::WalletService},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, factory::helpers};

mod cancel_for_user;
mod update_status;
