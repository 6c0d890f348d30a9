use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        returns::{CreateReturnDto, ReturnDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::return_request::ReturnRequest,
        service::returns::ReturnService, state::AppState,
    },
};

/// Tag for grouping return endpoints in OpenAPI documentation
pub static RETURN_TAG: &str = "returns";

/// List the caller's return requests, newest first.
#[utoipa::path(
    get,
    path = "/api/returns",
    tag = RETURN_TAG,
    responses(
        (status = 200, description = "Return requests", body = Vec<ReturnDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_returns(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = ReturnService::new(&state.db);

    let returns = service.list_for_user(user.id).await?;

    let returns: Vec<ReturnDto> = returns.into_iter().map(ReturnRequest::into_dto).collect();

    Ok((StatusCode::OK, Json(returns)))
}

/// Request a return for units of a delivered order item.
///
/// Returns are accepted within the configured window after delivery and never for more units
/// than were bought, counting units already claimed by earlier open or completed requests.
///
/// # Returns
/// - `201 Created` - Return requested
/// - `400 Bad Request` - Missing reason, order not delivered, window closed, or too many units
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Order item not found for this user
#[utoipa::path(
    post,
    path = "/api/returns",
    tag = RETURN_TAG,
    request_body = CreateReturnDto,
    responses(
        (status = 201, description = "Return requested", body = ReturnDto),
        (status = 400, description = "Return not allowed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_return(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReturnDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = ReturnService::new(&state.db);

    let request = service
        .create(
            user.id,
            payload.order_item_id,
            payload.quantity,
            payload.reason,
            state.config.return_window_days,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}
