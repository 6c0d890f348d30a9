use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, wallet::WalletDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::wallet::WalletService,
        state::AppState,
    },
};

/// Tag for grouping wallet endpoints in OpenAPI documentation
pub static WALLET_TAG: &str = "wallet";

/// Get the caller's wallet balance and recent transactions.
///
/// Customers receive refunds here; sellers receive settled commissions. A wallet is created
/// with a zero balance the first time it is read.
#[utoipa::path(
    get,
    path = "/api/wallet",
    tag = WALLET_TAG,
    responses(
        (status = 200, description = "Wallet", body = WalletDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_wallet(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = WalletService::new(&state.db);

    let wallet = service.wallet(user.id).await?;

    Ok((StatusCode::OK, Json(wallet.into_dto())))
}
