use crate::server::{
    config::Config,
    data::product::ProductRepository,
    error::{payment::PaymentError, AppError},
    integration::{
        mail::fake::RecordingMailer,
        payment::{
            fake::{FakePaymentGateway, SECRET},
            sign,
        },
    },
    model::{
        checkout::{PlaceOrderParam, VerifyPaymentParam},
        commission::CommissionStatus,
        offer::OfferType,
        order::{OrderStatus, PaymentMethod, PaymentStatus, ShippingAddress},
        user::User,
    },
    service::{checkout::CheckoutService, wallet::WalletService},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, factory::helpers};

mod create_order;
mod summary;
mod verify;

fn address() -> ShippingAddress {
    ShippingAddress {
        name: "Asha Rao".to_string(),
        phone: "9876543210".to_string(),
        line1: "12 MG Road".to_string(),
        line2: None,
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        pincode: "560001".to_string(),
    }
}

fn place(payment_method: PaymentMethod) -> PlaceOrderParam {
    PlaceOrderParam {
        offer_code: None,
        shipping_address: address(),
        payment_method,
    }
}
