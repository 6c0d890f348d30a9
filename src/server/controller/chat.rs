use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatRequestDto, ChatResponseDto},
    },
    server::{
        error::AppError, model::chat::ChatParam, service::chat::ChatService, state::AppState,
    },
};

/// Tag for grouping assistant endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Ask the style assistant.
///
/// Products matching words of the message are looked up and given to the model as store
/// context. When no model is configured or the model call fails a fallback reply is returned,
/// still with status 200, so the storefront widget never shows an error.
///
/// # Returns
/// - `200 OK` - Reply text and suggested products
/// - `400 Bad Request` - Empty message or message over 1000 characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = CHAT_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponseDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ChatService::new(
        &state.db,
        state.chat_model.as_deref(),
        &state.config.currency,
    );

    let reply = service.chat(ChatParam::from_dto(payload)?).await?;

    Ok((StatusCode::OK, Json(reply.into_dto())))
}
