use crate::server::{
    data::commission::CommissionRepository,
    model::commission::CommissionStatus,
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::helpers};

mod seller_earnings;
mod settle;
mod transition_for_order;
