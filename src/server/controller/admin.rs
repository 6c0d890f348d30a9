//! Back-office endpoints. Every handler here requires the admin role.

pub mod catalog;
pub mod order;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::AdminStatsDto,
        api::ErrorDto,
        commission::{CommissionDto, SettlementDto},
        seller::{ApproveSellerDto, CommissionRateDto, ReasonDto, SellerDto},
        wallet::{CompletePayoutDto, PayoutDto},
    },
    server::{
        controller::param::{parse_filter, SellerFilterParam, StatusParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            commission::{Commission, CommissionFilter, CommissionStatus},
            seller::{Seller, SellerStatus},
            wallet::{Payout, PayoutStatus},
            ParseEnum,
        },
        service::{
            admin::AdminService, commission::CommissionService, payout::PayoutService,
            seller::SellerService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Checks the bearer token belongs to an admin.
pub(super) async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    AuthGuard::new(&state.db, &state.config.jwt_secret, headers)
        .require(&[Permission::Admin])
        .await?;

    Ok(())
}

/// Get marketplace overview figures.
///
/// # Access Control
/// - `Admin` - Only admins can view platform figures
///
/// # Returns
/// - `200 OK` - User, seller, catalog, order and money totals plus the latest orders
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Overview figures", body = AdminStatsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = AdminService::new(&state.db);

    let stats = service.stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// List seller stores, optionally by status.
#[utoipa::path(
    get,
    path = "/api/admin/sellers",
    tag = ADMIN_TAG,
    params(StatusParam),
    responses(
        (status = 200, description = "Sellers", body = Vec<SellerDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_sellers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StatusParam>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = SellerService::new(&state.db, &state.config);

    let sellers = service
        .list(parse_filter(params.status.as_deref(), SellerStatus::parse, "status")?)
        .await?;

    let sellers: Vec<SellerDto> = sellers.into_iter().map(Seller::into_dto).collect();

    Ok((StatusCode::OK, Json(sellers)))
}

/// Approve a seller store.
///
/// Approval opens the catalog and payout endpoints to the store. The commission rate can be
/// set at the same time; otherwise the store keeps the platform default.
///
/// # Returns
/// - `200 OK` - Store approved, seller notified
/// - `400 Bad Request` - Already approved or rate outside 0-5000 basis points
/// - `404 Not Found` - Unknown seller
#[utoipa::path(
    post,
    path = "/api/admin/sellers/{id}/approve",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = ApproveSellerDto,
    responses(
        (status = 200, description = "Seller approved", body = SellerDto),
        (status = 400, description = "Seller cannot be approved", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn approve_seller(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<ApproveSellerDto>>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = SellerService::new(&state.db, &state.config);

    let Json(payload) = payload.unwrap_or_default();
    let seller = service.approve(id, payload.commission_rate_bps).await?;

    Ok((StatusCode::OK, Json(seller.into_dto())))
}

/// Reject a pending seller application.
#[utoipa::path(
    post,
    path = "/api/admin/sellers/{id}/reject",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = ReasonDto,
    responses(
        (status = 200, description = "Seller rejected", body = SellerDto),
        (status = 400, description = "Seller is not pending", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn reject_seller(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<ReasonDto>>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = SellerService::new(&state.db, &state.config);

    let Json(payload) = payload.unwrap_or_default();
    let seller = service.reject(id, payload.reason).await?;

    Ok((StatusCode::OK, Json(seller.into_dto())))
}

/// Suspend an approved seller store.
#[utoipa::path(
    post,
    path = "/api/admin/sellers/{id}/suspend",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = ReasonDto,
    responses(
        (status = 200, description = "Seller suspended", body = SellerDto),
        (status = 400, description = "Seller is not approved", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn suspend_seller(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<ReasonDto>>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = SellerService::new(&state.db, &state.config);

    let Json(payload) = payload.unwrap_or_default();
    let seller = service.suspend(id, payload.reason).await?;

    Ok((StatusCode::OK, Json(seller.into_dto())))
}

/// Settle every eligible commission of a seller.
///
/// Commissions for items with an open return are skipped and stay eligible.
#[utoipa::path(
    post,
    path = "/api/admin/sellers/{id}/settle",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Settlement result", body = SettlementDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn settle_seller(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = CommissionService::new(&state.db);

    let settlement = service.settle_all(id).await?;

    Ok((StatusCode::OK, Json(settlement.into_dto())))
}

/// Change a seller's commission rate for future orders.
#[utoipa::path(
    put,
    path = "/api/admin/sellers/{id}/commission-rate",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = CommissionRateDto,
    responses(
        (status = 200, description = "Rate updated", body = SellerDto),
        (status = 400, description = "Rate outside 0-5000 basis points", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Seller not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn set_commission_rate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CommissionRateDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = SellerService::new(&state.db, &state.config);

    let seller = service
        .set_commission_rate(id, payload.commission_rate_bps)
        .await?;

    Ok((StatusCode::OK, Json(seller.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/commissions",
    tag = ADMIN_TAG,
    params(SellerFilterParam),
    responses(
        (status = 200, description = "Commissions", body = Vec<CommissionDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_commissions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SellerFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = CommissionService::new(&state.db);

    let commissions = service
        .list(CommissionFilter {
            seller_id: params.seller_id,
            status: parse_filter(params.status.as_deref(), CommissionStatus::parse, "status")?,
        })
        .await?;

    let commissions: Vec<CommissionDto> =
        commissions.into_iter().map(Commission::into_dto).collect();

    Ok((StatusCode::OK, Json(commissions)))
}

/// Settle a single eligible commission into the seller's wallet.
///
/// # Returns
/// - `200 OK` - Commission settled
/// - `400 Bad Request` - Commission not eligible or its item has an open return
/// - `404 Not Found` - Unknown commission
#[utoipa::path(
    post,
    path = "/api/admin/commissions/{id}/settle",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Commission ID")),
    responses(
        (status = 200, description = "Commission settled", body = CommissionDto),
        (status = 400, description = "Commission cannot be settled", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Commission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn settle_commission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = CommissionService::new(&state.db);

    let commission = service.settle(id).await?;

    Ok((StatusCode::OK, Json(commission.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/payouts",
    tag = ADMIN_TAG,
    params(SellerFilterParam),
    responses(
        (status = 200, description = "Payout requests", body = Vec<PayoutDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn list_payouts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SellerFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = PayoutService::new(&state.db);

    let payouts = service
        .list(
            params.seller_id,
            parse_filter(params.status.as_deref(), PayoutStatus::parse, "status")?,
        )
        .await?;

    let payouts: Vec<PayoutDto> = payouts.into_iter().map(Payout::into_dto).collect();

    Ok((StatusCode::OK, Json(payouts)))
}

/// Mark a requested payout as paid with the bank transfer reference.
#[utoipa::path(
    post,
    path = "/api/admin/payouts/{id}/complete",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Payout ID")),
    request_body = CompletePayoutDto,
    responses(
        (status = 200, description = "Payout completed", body = PayoutDto),
        (
            status = 400,
            description = "Missing reference or payout already processed",
            body = ErrorDto
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Payout not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn complete_payout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CompletePayoutDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = PayoutService::new(&state.db);

    let payout = service.complete(id, payload.reference).await?;

    Ok((StatusCode::OK, Json(payout.into_dto())))
}

/// Reject a requested payout; the amount goes back to the seller's wallet.
#[utoipa::path(
    post,
    path = "/api/admin/payouts/{id}/reject",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Payout ID")),
    request_body = ReasonDto,
    responses(
        (status = 200, description = "Payout rejected", body = PayoutDto),
        (status = 400, description = "Payout already processed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Payout not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn reject_payout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<ReasonDto>>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let service = PayoutService::new(&state.db);

    let Json(payload) = payload.unwrap_or_default();
    let payout = service.reject(id, payload.reason).await?;

    Ok((StatusCode::OK, Json(payout.into_dto())))
}
