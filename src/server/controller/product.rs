use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        product::{CreateReviewDto, PaginatedProductsDto, ProductDto, ReviewDto},
    },
    server::{
        controller::param::ProductQueryParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::product::Review,
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// List storefront products.
///
/// Returns one page of active products matching the filters, each priced after any live flash
/// sale. The endpoint is public; when a signed-in shopper sends a `search` term it is added to
/// their search history.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers, read for an optional bearer token
/// - `params` - Filters, sort order and zero-based pagination
///
/// # Returns
/// - `200 OK` - Page of products
/// - `400 Bad Request` - Unknown gender or sort value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(ProductQueryParam),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ProductQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .optional()
        .await?;

    let service = ProductService::new(&state.db);

    let page = service.list(params.into_filter()?, viewer.as_ref()).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get an active product by ID.
///
/// # Returns
/// - `200 OK` - Product with its effective price
/// - `404 Not Found` - Unknown or archived product
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service.get(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// List reviews for a product, newest first.
#[utoipa::path(
    get,
    path = "/api/products/{id}/reviews",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Reviews", body = Vec<ReviewDto>),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let reviews = service.list_reviews(id).await?;

    let reviews: Vec<ReviewDto> = reviews.into_iter().map(Review::into_dto).collect();

    Ok((StatusCode::OK, Json(reviews)))
}

/// Review a product.
///
/// Each shopper may review a product once; the rating is folded into the product's average.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `201 Created` - Review stored
/// - `400 Bad Request` - Rating outside 1-5 or product already reviewed
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown or archived product
#[utoipa::path(
    post,
    path = "/api/products/{id}/reviews",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review stored", body = ReviewDto),
        (status = 400, description = "Invalid or duplicate review", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = ProductService::new(&state.db);

    let review = service
        .add_review(&user, id, payload.rating, payload.comment)
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}
