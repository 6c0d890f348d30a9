use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        cart::CartDto,
        wishlist::{AddWishlistItemDto, WishlistItemDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::wishlist::WishlistEntry,
        service::wishlist::WishlistService, state::AppState,
    },
};

/// Tag for grouping wishlist endpoints in OpenAPI documentation
pub static WISHLIST_TAG: &str = "wishlist";

/// Get the caller's wishlist, most recently saved first.
#[utoipa::path(
    get,
    path = "/api/wishlist",
    tag = WISHLIST_TAG,
    responses(
        (status = 200, description = "Saved products", body = Vec<WishlistItemDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = WishlistService::new(&state.db);

    let entries = service.list(user.id).await?;

    let entries: Vec<WishlistItemDto> =
        entries.into_iter().map(WishlistEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Save a product to the wishlist.
///
/// # Returns
/// - `201 Created` - Product saved
/// - `400 Bad Request` - Product already saved
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown or archived product
#[utoipa::path(
    post,
    path = "/api/wishlist",
    tag = WISHLIST_TAG,
    request_body = AddWishlistItemDto,
    responses(
        (status = 201, description = "Product saved", body = WishlistItemDto),
        (status = 400, description = "Already in the wishlist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddWishlistItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = WishlistService::new(&state.db);

    let entry = service.add(user.id, payload.product_id).await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/wishlist/{product_id}",
    tag = WISHLIST_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product removed", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product not in the wishlist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = WishlistService::new(&state.db);

    service.remove(user.id, product_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Removed from wishlist"))))
}

/// Move a saved product into the cart.
///
/// One unit is added with no size or colour chosen and the product leaves the wishlist.
#[utoipa::path(
    post,
    path = "/api/wishlist/{product_id}/move-to-cart",
    tag = WISHLIST_TAG,
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Updated cart", body = CartDto),
        (status = 400, description = "Out of stock", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product not in the wishlist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn move_to_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = WishlistService::new(&state.db);

    let cart = service.move_to_cart(user.id, product_id).await?;

    Ok((StatusCode::OK, Json(cart.into_dto())))
}
