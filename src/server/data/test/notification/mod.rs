use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{CreateNotificationParam, NotificationKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_read;
