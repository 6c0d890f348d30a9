use crate::server::data::search_history::SearchHistoryRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod popular;
mod recent;
