use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SuggestionDto {
    /// `product`, `brand` or `category`.
    pub kind: String,
    pub text: String,
    pub product_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PopularSearchDto {
    pub query: String,
    pub count: u64,
}
