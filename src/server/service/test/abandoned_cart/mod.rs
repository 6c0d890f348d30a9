use crate::server::{
    config::Config,
    data::abandoned_cart::AbandonedCartRepository,
    error::AppError,
    integration::mail::fake::RecordingMailer,
    service::abandoned_cart::AbandonedCartService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod popup;
mod send_reminders;
