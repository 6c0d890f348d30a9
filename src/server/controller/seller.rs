use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::LoginDto,
        commission::CommissionDto,
        order::OrderDto,
        product::{CreateProductDto, PaginatedProductsDto, ProductDto, UpdateProductDto},
        returns::{ReturnDto, ReturnNoteDto},
        seller::{
            SellerAuthResponseDto, SellerDashboardDto, SellerDto, SellerRegisterDto,
            UpdateSellerProfileDto,
        },
        wallet::{PayoutDto, RequestPayoutDto},
    },
    server::{
        controller::param::{parse_filter, PaginationParam, StatusParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            commission::{Commission, CommissionFilter, CommissionStatus},
            order::Order,
            product::{CreateProductParam, UpdateProductParam},
            return_request::{ReturnFilter, ReturnRequest, ReturnStatus},
            seller::{OwnerScope, Seller, SellerRegisterParam, UpdateSellerProfileParam},
            wallet::{Payout, PayoutStatus},
            ParseEnum,
        },
        service::{
            commission::CommissionService, order::OrderService, payout::PayoutService,
            product::ProductService, returns::ReturnService, seller::SellerService,
        },
        state::AppState,
    },
};

/// Tag for grouping seller portal endpoints in OpenAPI documentation
pub static SELLER_TAG: &str = "seller";

/// Resolves the caller's store profile after checking `permission`.
async fn current_seller(
    state: &AppState,
    headers: &HeaderMap,
    permission: Permission,
) -> Result<Seller, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, headers)
        .require(&[permission])
        .await?;

    SellerService::new(&state.db, &state.config)
        .profile(user.id)
        .await
}

/// Register a seller account and store.
///
/// Creates a user with the seller role and a store profile awaiting admin approval. The
/// returned token can be used for the profile and dashboard straight away; catalog and payout
/// endpoints stay closed until an admin approves the store.
///
/// # Returns
/// - `201 Created` - Seller registered, token issued
/// - `400 Bad Request` - Invalid fields or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/seller/register",
    tag = SELLER_TAG,
    request_body = SellerRegisterDto,
    responses(
        (status = 201, description = "Seller registered", body = SellerAuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<SellerRegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SellerService::new(&state.db, &state.config);

    let session = service
        .register(SellerRegisterParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// Log in to the seller portal.
///
/// # Returns
/// - `200 OK` - Token, user and store profile
/// - `401 Unauthorized` - Invalid credentials
/// - `403 Forbidden` - The account is not a seller
#[utoipa::path(
    post,
    path = "/api/seller/login",
    tag = SELLER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = SellerAuthResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account is not a seller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SellerService::new(&state.db, &state.config);

    let session = service.login(&payload.email, &payload.password).await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/seller/profile",
    tag = SELLER_TAG,
    responses(
        (status = 200, description = "Store profile", body = SellerDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::Seller).await?;

    Ok((StatusCode::OK, Json(seller.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/seller/profile",
    tag = SELLER_TAG,
    request_body = UpdateSellerProfileDto,
    responses(
        (status = 200, description = "Updated store profile", body = SellerDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateSellerProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[Permission::Seller])
        .await?;

    let service = SellerService::new(&state.db, &state.config);

    let seller = service
        .update_profile(user.id, UpdateSellerProfileParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(seller.into_dto())))
}

/// Get catalog, order and earnings figures for the caller's store.
#[utoipa::path(
    get,
    path = "/api/seller/dashboard",
    tag = SELLER_TAG,
    responses(
        (status = 200, description = "Dashboard figures", body = SellerDashboardDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::Seller).await?;

    let service = SellerService::new(&state.db, &state.config);

    let dashboard = service.dashboard(&seller).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

/// List the store's products, archived ones included.
///
/// # Access Control
/// - `ApprovedSeller` - Store must be approved
#[utoipa::path(
    get,
    path = "/api/seller/products",
    tag = SELLER_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = ProductService::new(&state.db);

    let page = service
        .list_for_seller(seller.id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Add a product to the store's catalog.
///
/// The product is always owned by the caller's store; any `seller_id` in the body is ignored.
///
/// # Access Control
/// - `ApprovedSeller` - Store must be approved
///
/// # Returns
/// - `201 Created` - Product created
/// - `400 Bad Request` - Invalid product data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Store not approved
#[utoipa::path(
    post,
    path = "/api/seller/products",
    tag = SELLER_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = ProductService::new(&state.db);

    let param = CreateProductParam::from_dto(payload, Some(seller.id))?;
    let product = service.create(param).await?;
    let product = service.priced(product).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Update one of the store's products.
///
/// Products owned by other stores are reported as not found.
#[utoipa::path(
    put,
    path = "/api/seller/products/{id}",
    tag = SELLER_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
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
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = ProductService::new(&state.db);

    let product = service
        .update(
            OwnerScope::Seller(seller.id),
            id,
            UpdateProductParam::from_dto(payload)?,
        )
        .await?;
    let product = service.priced(product).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Archive one of the store's products.
#[utoipa::path(
    delete,
    path = "/api/seller/products/{id}",
    tag = SELLER_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product archived", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
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
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = ProductService::new(&state.db);

    service.archive(OwnerScope::Seller(seller.id), id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Product archived"))))
}

/// List orders containing at least one of the store's products.
#[utoipa::path(
    get,
    path = "/api/seller/orders",
    tag = SELLER_TAG,
    responses(
        (status = 200, description = "Orders", body = Vec<OrderDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = OrderService::new(&state.db);

    let orders = service.list_for_seller(seller.id).await?;

    let orders: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    get,
    path = "/api/seller/returns",
    tag = SELLER_TAG,
    params(StatusParam),
    responses(
        (status = 200, description = "Return requests for the store", body = Vec<ReturnDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_returns(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StatusParam>,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = ReturnService::new(&state.db);

    let returns = service
        .list(ReturnFilter {
            seller_id: Some(seller.id),
            status: parse_filter(params.status.as_deref(), ReturnStatus::parse, "status")?,
            ..Default::default()
        })
        .await?;

    let returns: Vec<ReturnDto> = returns.into_iter().map(ReturnRequest::into_dto).collect();

    Ok((StatusCode::OK, Json(returns)))
}

/// Approve a requested return for one of the store's items.
#[utoipa::path(
    post,
    path = "/api/seller/returns/{id}/approve",
    tag = SELLER_TAG,
    params(("id" = i32, Path, description = "Return request ID")),
    responses(
        (status = 200, description = "Return approved", body = ReturnDto),
        (status = 400, description = "Return is not awaiting a decision", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
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
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = ReturnService::new(&state.db);

    let request = service.approve(OwnerScope::Seller(seller.id), id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/seller/returns/{id}/reject",
    tag = SELLER_TAG,
    params(("id" = i32, Path, description = "Return request ID")),
    request_body = ReturnNoteDto,
    responses(
        (status = 200, description = "Return rejected", body = ReturnDto),
        (status = 400, description = "Return is not awaiting a decision", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
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
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = ReturnService::new(&state.db);

    let note = payload.and_then(|Json(payload)| payload.note);
    let request = service
        .reject(OwnerScope::Seller(seller.id), id, note)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// List the store's commission records.
#[utoipa::path(
    get,
    path = "/api/seller/commissions",
    tag = SELLER_TAG,
    params(StatusParam),
    responses(
        (status = 200, description = "Commissions", body = Vec<CommissionDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_commissions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StatusParam>,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = CommissionService::new(&state.db);

    let commissions = service
        .list(CommissionFilter {
            seller_id: Some(seller.id),
            status: parse_filter(params.status.as_deref(), CommissionStatus::parse, "status")?,
        })
        .await?;

    let commissions: Vec<CommissionDto> =
        commissions.into_iter().map(Commission::into_dto).collect();

    Ok((StatusCode::OK, Json(commissions)))
}

#[utoipa::path(
    get,
    path = "/api/seller/payouts",
    tag = SELLER_TAG,
    params(StatusParam),
    responses(
        (status = 200, description = "Payout requests", body = Vec<PayoutDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_payouts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StatusParam>,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = PayoutService::new(&state.db);

    let payouts = service
        .list(
            Some(seller.id),
            parse_filter(params.status.as_deref(), PayoutStatus::parse, "status")?,
        )
        .await?;

    let payouts: Vec<PayoutDto> = payouts.into_iter().map(Payout::into_dto).collect();

    Ok((StatusCode::OK, Json(payouts)))
}

/// Request a payout from the store's wallet.
///
/// The amount is taken from the wallet when the request is made and handed back if an admin
/// rejects it.
///
/// # Returns
/// - `201 Created` - Payout requested
/// - `400 Bad Request` - Non-positive amount or insufficient wallet balance
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Store not approved
#[utoipa::path(
    post,
    path = "/api/seller/payouts",
    tag = SELLER_TAG,
    request_body = RequestPayoutDto,
    responses(
        (status = 201, description = "Payout requested", body = PayoutDto),
        (status = 400, description = "Invalid amount or insufficient balance", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Store not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn request_payout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RequestPayoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let seller = current_seller(&state, &headers, Permission::ApprovedSeller).await?;

    let service = PayoutService::new(&state.db);

    let payout = service.request(&seller, payload.amount).await?;

    Ok((StatusCode::CREATED, Json(payout.into_dto())))
}
