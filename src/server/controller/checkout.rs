use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        checkout::{
            CheckoutSummaryDto, CheckoutSummaryRequestDto, CreatePaymentOrderDto,
            CreatePaymentOrderResponseDto, VerifyPaymentDto,
        },
        order::OrderDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::checkout::PlaceOrderParam,
        service::checkout::CheckoutService,
        state::AppState,
    },
};

/// Tag for grouping checkout and payment endpoints in OpenAPI documentation
pub static CHECKOUT_TAG: &str = "checkout";

/// Price the caller's cart for checkout.
///
/// Applies the coupon code when one is given, otherwise the best automatic offer, then the
/// shipping fee unless the discounted subtotal reaches the free-shipping threshold.
///
/// # Returns
/// - `200 OK` - Subtotal, discount, shipping and total
/// - `400 Bad Request` - Empty cart or the code does not apply
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown offer code
#[utoipa::path(
    post,
    path = "/api/checkout/summary",
    tag = CHECKOUT_TAG,
    request_body = CheckoutSummaryRequestDto,
    responses(
        (status = 200, description = "Checkout totals", body = CheckoutSummaryDto),
        (status = 400, description = "Empty cart or offer not applicable", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutSummaryRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CheckoutService::new(
        &state.db,
        &state.config,
        state.payment.as_ref(),
        state.mailer.as_ref(),
    );

    let totals = service
        .summary(user.id, payload.offer_code.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(totals.into_dto(&state.config.currency))))
}

/// Place an order from the caller's cart.
///
/// Cash-on-delivery orders are confirmed immediately: stock is taken, commissions are recorded,
/// the cart is cleared and a confirmation email is sent. Online orders are created as pending
/// together with a gateway order; the storefront opens the payment widget with the returned
/// `key_id` and then calls `/api/payment/verify`.
///
/// # Returns
/// - `201 Created` - Order placed, with gateway details for online payment
/// - `400 Bad Request` - Empty cart, invalid address, or not enough stock
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Payment gateway or database error
#[utoipa::path(
    post,
    path = "/api/payment/create-order",
    tag = CHECKOUT_TAG,
    request_body = CreatePaymentOrderDto,
    responses(
        (status = 201, description = "Order placed", body = CreatePaymentOrderResponseDto),
        (status = 400, description = "Order cannot be placed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CheckoutService::new(
        &state.db,
        &state.config,
        state.payment.as_ref(),
        state.mailer.as_ref(),
    );

    let placed = service
        .create_order(&user, PlaceOrderParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(placed.into_dto())))
}

/// Verify an online payment and confirm the order.
///
/// The signature returned by the payment widget is checked against the gateway secret. On a
/// mismatch the payment is marked failed and the order stays pending.
///
/// # Returns
/// - `200 OK` - Order confirmed and paid
/// - `400 Bad Request` - Signature mismatch, order not pending, or gateway order mismatch
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Order not found for this user
#[utoipa::path(
    post,
    path = "/api/payment/verify",
    tag = CHECKOUT_TAG,
    request_body = VerifyPaymentDto,
    responses(
        (status = 200, description = "Payment verified", body = OrderDto),
        (status = 400, description = "Payment could not be verified", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<VerifyPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CheckoutService::new(
        &state.db,
        &state.config,
        state.payment.as_ref(),
        state.mailer.as_ref(),
    );

    let order = service.verify(&user, payload.into()).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
