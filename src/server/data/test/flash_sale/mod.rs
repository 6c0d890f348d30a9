use crate::server::data::flash_sale::FlashSaleRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, flash_sale::FlashSaleFactory},
};

mod best_live_percent;
