use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        offer::{FlashSaleDto, OfferDto, OfferValidationDto, ValidateOfferDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::offer::{FlashSale, Offer},
        service::{cart::CartService, flash_sale::FlashSaleService, offer::OfferService},
        state::AppState,
    },
};

/// Tag for grouping offer endpoints in OpenAPI documentation
pub static OFFER_TAG: &str = "offer";

/// List offers shoppers can use right now.
///
/// Returns active offers inside their validity window, both coupon codes and automatic
/// offers, that still have uses left.
#[utoipa::path(
    get,
    path = "/api/offers",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "Running offers", body = Vec<OfferDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_offers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OfferService::new(&state.db);

    let offers = service.list_running().await?;

    let offers: Vec<OfferDto> = offers.into_iter().map(Offer::into_dto).collect();

    Ok((StatusCode::OK, Json(offers)))
}

/// Check a coupon code against the caller's cart.
///
/// # Returns
/// - `200 OK` - The offer and the discount it gives on the current cart
/// - `400 Bad Request` - Expired, used up, or below the minimum order value
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown or inactive code
#[utoipa::path(
    post,
    path = "/api/offers/validate",
    tag = OFFER_TAG,
    request_body = ValidateOfferDto,
    responses(
        (status = 200, description = "Offer applies", body = OfferValidationDto),
        (status = 400, description = "Offer does not apply to this cart", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn validate_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ValidateOfferDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db).get(user.id).await?;
    let service = OfferService::new(&state.db);

    let applied = service.validate(&payload.code, &cart).await?;

    Ok((StatusCode::OK, Json(applied.into_validation_dto(cart.subtotal()))))
}

/// List flash sales that are live now.
#[utoipa::path(
    get,
    path = "/api/flash-sales",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "Live flash sales", body = Vec<FlashSaleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_flash_sales(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = FlashSaleService::new(&state.db);

    let sales = service.list_live().await?;

    let sales: Vec<FlashSaleDto> = sales.into_iter().map(FlashSale::into_dto).collect();

    Ok((StatusCode::OK, Json(sales)))
}
