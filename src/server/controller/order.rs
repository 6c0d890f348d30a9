use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{OrderDto, PaginatedOrdersDto},
    },
    server::{
        controller::param::PaginationParam, error::AppError, middleware::auth::AuthGuard,
        service::order::OrderService, state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List the caller's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Page of orders", body = PaginatedOrdersDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = OrderService::new(&state.db);

    let orders = service
        .list_for_user(user.id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Get one of the caller's orders with its items.
///
/// Orders placed by other users are reported as not found.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = OrderService::new(&state.db);

    let order = service.get_for_user(user.id, id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Cancel one of the caller's orders.
///
/// Only pending, confirmed and processing orders can be cancelled. Stock taken by the order is
/// returned, seller commissions are reversed and a paid online order is refunded to the wallet.
///
/// # Returns
/// - `200 OK` - Cancelled order
/// - `400 Bad Request` - Order already shipped, delivered or cancelled
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Order not found for this user
#[utoipa::path(
    post,
    path = "/api/orders/{id}/cancel",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = OrderDto),
        (status = 400, description = "Order can no longer be cancelled", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = OrderService::new(&state.db);

    let order = service.cancel_for_user(user.id, id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
