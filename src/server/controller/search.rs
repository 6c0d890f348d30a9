use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        search::{PopularSearchDto, SuggestionDto},
    },
    server::{
        controller::param::SearchParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::search::{PopularSearch, Suggestion},
        service::search::SearchService,
        state::AppState,
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

/// Suggest products, brands and categories for a partial query.
///
/// Queries shorter than two characters return an empty list.
///
/// # Returns
/// - `200 OK` - Up to eight suggestions, products first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/search/autocomplete",
    tag = SEARCH_TAG,
    params(SearchParam),
    responses(
        (status = 200, description = "Suggestions", body = Vec<SuggestionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = SearchService::new(&state.db);

    let suggestions = service.autocomplete(&params.q).await?;

    let suggestions: Vec<SuggestionDto> =
        suggestions.into_iter().map(Suggestion::into_dto).collect();

    Ok((StatusCode::OK, Json(suggestions)))
}

/// Get the caller's recent searches, newest first.
#[utoipa::path(
    get,
    path = "/api/search/recent",
    tag = SEARCH_TAG,
    responses(
        (status = 200, description = "Recent queries", body = Vec<String>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_recent(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = SearchService::new(&state.db);

    let recent = service.recent(user.id).await?;

    Ok((StatusCode::OK, Json(recent)))
}

/// Clear the caller's search history.
#[utoipa::path(
    delete,
    path = "/api/search/recent",
    tag = SEARCH_TAG,
    responses(
        (status = 200, description = "History cleared", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn clear_recent(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config.jwt_secret, &headers)
        .require(&[])
        .await?;

    let service = SearchService::new(&state.db);

    service.clear_recent(user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Search history cleared"))))
}

/// Most frequent searches across all shoppers over the last 30 days.
#[utoipa::path(
    get,
    path = "/api/search/popular",
    tag = SEARCH_TAG,
    responses(
        (status = 200, description = "Popular queries", body = Vec<PopularSearchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_popular(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SearchService::new(&state.db);

    let popular = service.popular().await?;

    let popular: Vec<PopularSearchDto> =
        popular.into_iter().map(PopularSearch::into_dto).collect();

    Ok((StatusCode::OK, Json(popular)))
}
