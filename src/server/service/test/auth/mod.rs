use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{RegisterParam, Role},
    service::auth::AuthService,
};
use test_utils::{builder::TestBuilder, factory};

mod bootstrap_admin;
mod register;

fn register_param(email: &str) -> RegisterParam {
    RegisterParam {
        name: "Asha Rao".to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
        phone: None,
    }
}
