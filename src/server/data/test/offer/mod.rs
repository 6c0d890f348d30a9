use crate::server::data::offer::OfferRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::offer::OfferFactory};

mod increment_used;
mod list_running;
