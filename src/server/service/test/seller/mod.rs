use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::{
        commission::CommissionStatus,
        product::ProductStatus,
        seller::{Seller, SellerRegisterParam, SellerStatus, LOW_STOCK_THRESHOLD},
        user::{RegisterParam, Role},
    },
    service::{auth::AuthService, seller::SellerService},
};
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers, product::ProductFactory},
};

mod change_status;
mod dashboard;
mod login;

fn register_param(email: &str) -> SellerRegisterParam {
    SellerRegisterParam {
        name: "Meera Iyer".to_string(),
        email: email.to_string(),
        password: "handloom-2024".to_string(),
        store_name: "Meera Handlooms".to_string(),
        description: None,
        phone: Some("9876543210".to_string()),
        business_id: None,
        pickup_address: Some("4 Weavers Lane, Kanchipuram".to_string()),
    }
}
