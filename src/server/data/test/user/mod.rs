use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, Role},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
