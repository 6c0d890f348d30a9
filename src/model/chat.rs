use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::ProductSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ChatTurnDto {
    /// `user` or `assistant`.
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ChatRequestDto {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurnDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ChatResponseDto {
    pub reply: String,
    pub products: Vec<ProductSummaryDto>,
}
