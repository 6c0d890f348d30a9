use crate::server::{
    data::{payout::PayoutRepository, return_request::ReturnRepository},
    error::AppError,
    model::{
        commission::CommissionStatus,
        order::PaymentStatus,
        product::ProductStatus,
        return_request::CreateReturnParam,
    },
    service::admin::AdminService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers, order::OrderFactory, product::ProductFactory},
};

mod stats;
