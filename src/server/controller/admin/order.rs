use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{OrderDto, PaginatedOrdersDto, UpdateOrderStatusDto},
        returns::{ReturnDto, ReturnNoteDto},
    },
    server::{
        controller::{
            admin::{require_admin, ADMIN_TAG},
            param::{parse_filter, OrderQueryParam, StatusParam},
        },
        error::AppError,
        model::{
            order::OrderStatus,
            return_request::{ReturnFilter, ReturnRequest, ReturnStatus},
            seller::OwnerScope,
            ParseEnum,
        },
        service::{order::OrderService, returns::ReturnService},
        state::AppState,
    },
};

/// List all orders, newest first, optionally by status.
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = ADMIN_TAG,
    params(OrderQueryParam),
    responses(
        (status = 200, description = "Page of orders", body = PaginatedOrdersDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<OrderQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = OrderService::new(&state.db);

    let status = parse_filter(params.status.as_deref(), OrderStatus::parse, "status")?;
    let orders = service
        .list_all(status, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Move an order along its fulfilment flow.
///
/// Allowed steps are confirmed → processing → shipped → delivered, plus cancellation before
/// shipping. Delivery marks cash-on-delivery orders as paid and makes their commissions
/// eligible for settlement. Cancellation restocks, reverses commissions and refunds paid online
/// orders to the customer's wallet. The customer is notified of every change.
///
/// # Access Control
/// - `Admin` - Only admins can change order status
///
/// # Returns
/// - `200 OK` - Updated order
/// - `400 Bad Request` - Unknown status or a transition that is not allowed
/// - `404 Not Found` - Unknown order
#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = OrderService::new(&state.db);

    let next = OrderStatus::parse(&payload.status)
        .ok_or_else(|| AppError::bad_request(format!("Unknown status: {}", payload.status)))?;
    let order = service.update_status(id, next).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/returns",
    tag = ADMIN_TAG,
    params(StatusParam),
    responses(
        (status = 200, description = "Return requests", body = Vec<ReturnDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_returns(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StatusParam>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = ReturnService::new(&state.db);

    let returns = service
        .list(ReturnFilter {
            status: parse_filter(params.status.as_deref(), ReturnStatus::parse, "status")?,
            ..Default::default()
        })
        .await?;

    let returns: Vec<ReturnDto> = returns.into_iter().map(ReturnRequest::into_dto).collect();

    Ok((StatusCode::OK, Json(returns)))
}

#[utoipa::path(
    post,
    path = "/api/admin/returns/{id}/approve",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Return request ID")),
    responses(
        (status = 200, description = "Return approved", body = ReturnDto),
        (status = 400, description = "Return is not awaiting a decision", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Return not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn approve_return(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = ReturnService::new(&state.db);

    let request = service.approve(OwnerScope::Any, id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/returns/{id}/reject",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Return request ID")),
    request_body = ReturnNoteDto,
    responses(
        (status = 200, description = "Return rejected", body = ReturnDto),
        (status = 400, description = "Return is not awaiting a decision", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Return not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn reject_return(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<ReturnNoteDto>>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = ReturnService::new(&state.db);

    let note = payload.and_then(|Json(payload)| payload.note);
    let request = service.reject(OwnerScope::Any, id, note).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Record that the courier collected the returned units.
#[utoipa::path(
    post,
    path = "/api/admin/returns/{id}/pickup",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Return request ID")),
    responses(
        (status = 200, description = "Return picked up", body = ReturnDto),
        (status = 400, description = "Return is not approved", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Return not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn pickup_return(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = ReturnService::new(&state.db);

    let request = service.mark_picked_up(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Refund a picked-up return.
///
/// The item price times the returned quantity is credited to the customer's wallet, the units
/// go back into stock and the seller's commission on the item is reduced, or clawed back from
/// the seller's wallet when it was already settled.
///
/// # Returns
/// - `200 OK` - Return refunded
/// - `400 Bad Request` - Return has not been picked up, or was already refunded
/// - `404 Not Found` - Unknown return
#[utoipa::path(
    post,
    path = "/api/admin/returns/{id}/refund",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Return request ID")),
    responses(
        (status = 200, description = "Return refunded", body = ReturnDto),
        (status = 400, description = "Return cannot be refunded", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Return not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn refund_return(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = ReturnService::new(&state.db);

    let request = service.refund(id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
