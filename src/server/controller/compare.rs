use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        compare::{AddCompareItemDto, CompareDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::compare::CompareService,
        state::AppState,
    },
};

/// Tag for grouping comparison endpoints in OpenAPI documentation
pub static COMPARE_TAG: &str = "compare";

#[utoipa::path(
    get,
    path = "/api/compare",
    tag = COMPARE_TAG,
    responses(
        (status = 200, description = "Products being compared", body = CompareDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_comparison(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CompareService::new(&state.db);

    let comparison = service.get(user.id).await?;

    Ok((StatusCode::OK, Json(comparison.into_dto())))
}

/// Add a product to the comparison.
///
/// A comparison holds at most four products.
///
/// # Returns
/// - `200 OK` - Updated comparison
/// - `400 Bad Request` - Comparison full or product already added
/// - `404 Not Found` - Unknown or archived product
#[utoipa::path(
    post,
    path = "/api/compare",
    tag = COMPARE_TAG,
    request_body = AddCompareItemDto,
    responses(
        (status = 200, description = "Updated comparison", body = CompareDto),
        (status = 400, description = "Comparison full or duplicate", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn add_to_comparison(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddCompareItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CompareService::new(&state.db);

    let comparison = service.add(user.id, payload.product_id).await?;

    Ok((StatusCode::OK, Json(comparison.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/compare/{product_id}",
    tag = COMPARE_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Updated comparison", body = CompareDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product not being compared", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn remove_from_comparison(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CompareService::new(&state.db);

    let comparison = service.remove(user.id, product_id).await?;

    Ok((StatusCode::OK, Json(comparison.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/compare",
    tag = COMPARE_TAG,
    responses(
        (status = 200, description = "Comparison cleared", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn clear_comparison(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CompareService::new(&state.db);

    service.clear(user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Comparison cleared"))))
}
