use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        offer::{CreateFlashSaleDto, CreateOfferDto, FlashSaleDto, OfferDto, UpdateOfferDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::admin::{require_admin, ADMIN_TAG},
        error::AppError,
        model::{
            offer::{CreateFlashSaleParam, CreateOfferParam, FlashSale, Offer, UpdateOfferParam},
            product::{CreateProductParam, UpdateProductParam},
            seller::OwnerScope,
        },
        service::{flash_sale::FlashSaleService, offer::OfferService, product::ProductService},
        state::AppState,
    },
};

/// Create a product, either platform-owned or on behalf of a seller.
///
/// # Access Control
/// - `Admin` - Only admins can create products for any owner
///
/// # Returns
/// - `201 Created` - Product created
/// - `400 Bad Request` - Invalid product data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = ADMIN_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = ProductService::new(&state.db);

    let seller_id = payload.seller_id;
    let product = service
        .create(CreateProductParam::from_dto(payload, seller_id)?)
        .await?;
    let product = service.priced(product).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = ProductService::new(&state.db);

    let product = service
        .update(OwnerScope::Any, id, UpdateProductParam::from_dto(payload)?)
        .await?;
    let product = service.priced(product).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product archived", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn archive_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = ProductService::new(&state.db);

    service.archive(OwnerScope::Any, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Product archived"))))
}

/// List every offer, including inactive and expired ones.
#[utoipa::path(
    get,
    path = "/api/admin/offers",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Offers", body = Vec<OfferDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_offers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = OfferService::new(&state.db);

    let offers = service.list_all().await?;

    let offers: Vec<OfferDto> = offers.into_iter().map(Offer::into_dto).collect();

    Ok((StatusCode::OK, Json(offers)))
}

/// Create an offer.
///
/// Coupon codes are stored uppercase and must be unique. Offers without a code must be
/// automatic; those are applied at checkout when no code is entered.
///
/// # Returns
/// - `201 Created` - Offer created
/// - `400 Bad Request` - Invalid offer data or duplicate code
#[utoipa::path(
    post,
    path = "/api/admin/offers",
    tag = ADMIN_TAG,
    request_body = CreateOfferDto,
    responses(
        (status = 201, description = "Offer created", body = OfferDto),
        (status = 400, description = "Invalid offer data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOfferDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = OfferService::new(&state.db);

    let offer = service.create(CreateOfferParam::from_dto(payload)?).await?;

    Ok((StatusCode::CREATED, Json(offer.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/offers/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    request_body = UpdateOfferDto,
    responses(
        (status = 200, description = "Offer updated", body = OfferDto),
        (status = 400, description = "Invalid offer data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOfferDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = OfferService::new(&state.db);

    let offer = service
        .update(id, UpdateOfferParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(offer.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/offers/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Offer ID")),
    responses(
        (status = 200, description = "Offer deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = OfferService::new(&state.db);

    service.delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Offer deleted"))))
}

#[utoipa::path(
    get,
    path = "/api/admin/flash-sales",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Flash sales", body = Vec<FlashSaleDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_flash_sales(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = FlashSaleService::new(&state.db);

    let sales = service.list_all().await?;

    let sales: Vec<FlashSaleDto> = sales.into_iter().map(FlashSale::into_dto).collect();

    Ok((StatusCode::OK, Json(sales)))
}

/// Schedule a flash sale over a set of products.
///
/// While the sale is live its percentage comes off the listed products' price; when several
/// sales cover a product the largest discount wins.
///
/// # Returns
/// - `201 Created` - Flash sale created
/// - `400 Bad Request` - Discount outside 1-90, bad window, or unknown or missing products
#[utoipa::path(
    post,
    path = "/api/admin/flash-sales",
    tag = ADMIN_TAG,
    request_body = CreateFlashSaleDto,
    responses(
        (status = 201, description = "Flash sale created", body = FlashSaleDto),
        (status = 400, description = "Invalid flash sale data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_flash_sale(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFlashSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = FlashSaleService::new(&state.db);

    let sale = service
        .create(CreateFlashSaleParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(sale.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/flash-sales/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Flash sale ID")),
    responses(
        (status = 200, description = "Flash sale deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Flash sale not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_flash_sale(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = FlashSaleService::new(&state.db);

    service.delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Flash sale deleted"))))
}
