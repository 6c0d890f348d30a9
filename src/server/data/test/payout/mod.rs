use crate::server::{data::payout::PayoutRepository, model::wallet::PayoutStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod process;
