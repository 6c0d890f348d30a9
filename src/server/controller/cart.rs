use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        cart::{AddCartItemDto, CartDto, UpdateCartItemDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::cart::CartService,
        state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// Get the caller's cart.
///
/// Lines are priced against the live catalog, so a flash sale that started after the item was
/// added is already reflected. Lines whose product has been archived are left out.
///
/// # Returns
/// - `200 OK` - Cart with subtotal and item count
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Cart", body = CartDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CartService::new(&state.db);

    let cart = service.get(user.id).await?;

    Ok((StatusCode::OK, Json(cart.into_dto())))
}

/// Add a product to the cart.
///
/// Adding a product with the same size and colour as an existing line increases that line's
/// quantity instead of creating a new one.
///
/// # Returns
/// - `200 OK` - Updated cart
/// - `400 Bad Request` - Quantity outside 1-10, above stock, or unknown size/colour
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown or archived product
#[utoipa::path(
    post,
    path = "/api/cart",
    tag = CART_TAG,
    request_body = AddCartItemDto,
    responses(
        (status = 200, description = "Updated cart", body = CartDto),
        (status = 400, description = "Invalid quantity or variant", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CartService::new(&state.db);

    let cart = service.add(user.id, payload.into()).await?;

    Ok((StatusCode::OK, Json(cart.into_dto())))
}

/// Change the quantity of a cart line; 0 removes it.
#[utoipa::path(
    put,
    path = "/api/cart/{item_id}",
    tag = CART_TAG,
    params(("item_id" = i32, Path, description = "Cart line ID")),
    request_body = UpdateCartItemDto,
    responses(
        (status = 200, description = "Updated cart", body = CartDto),
        (status = 400, description = "Invalid quantity", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Cart line not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CartService::new(&state.db);

    let cart = service
        .update_quantity(user.id, item_id, payload.quantity)
        .await?;

    Ok((StatusCode::OK, Json(cart.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{item_id}",
    tag = CART_TAG,
    params(("item_id" = i32, Path, description = "Cart line ID")),
    responses(
        (status = 200, description = "Updated cart", body = CartDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Cart line not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CartService::new(&state.db);

    let cart = service.remove(user.id, item_id).await?;

    Ok((StatusCode::OK, Json(cart.into_dto())))
}

/// Empty the cart.
#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Cart cleared", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = CartService::new(&state.db);

    service.clear(user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Cart cleared"))))
}
