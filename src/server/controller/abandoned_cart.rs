use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Duration;

use crate::{
    model::{
        abandoned_cart::AbandonedCartDto,
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::abandoned_cart::AbandonedCart,
        service::abandoned_cart::AbandonedCartService, state::AppState,
    },
};

/// Tag for grouping abandoned-cart endpoints in OpenAPI documentation
pub static ABANDONED_CART_TAG: &str = "abandoned-cart";

/// Get the cart snapshot for the "you left something behind" popup.
///
/// Returns `null` unless the caller's cart has been idle for the configured number of minutes
/// and the popup has not been dismissed since the cart last changed.
#[utoipa::path(
    get,
    path = "/api/abandoned-cart",
    tag = ABANDONED_CART_TAG,
    responses(
        (status = 200, description = "Snapshot to show, or null", body = Option<AbandonedCartDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_popup(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = AbandonedCartService::new(&state.db);

    let cart = service
        .popup(
            user.id,
            Duration::minutes(state.config.abandoned_cart_idle_minutes),
        )
        .await?;

    Ok((StatusCode::OK, Json(cart.map(AbandonedCart::into_dto))))
}

#[utoipa::path(
    post,
    path = "/api/abandoned-cart/dismiss",
    tag = ABANDONED_CART_TAG,
    responses(
        (status = 200, description = "Popup dismissed", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn dismiss(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = AbandonedCartService::new(&state.db);

    service.dismiss(user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Reminder dismissed"))))
}
