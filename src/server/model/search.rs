//! Autocomplete suggestions and search history.

use crate::model::search::{PopularSearchDto, SuggestionDto};

/// Shortest query that produces suggestions or is recorded.
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS: usize = 8;
pub const RECENT_LIMIT: usize = 10;
pub const POPULAR_LIMIT: u64 = 10;
pub const POPULAR_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Product,
    Brand,
    Category,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Brand => "brand",
            Self::Category => "category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub text: String,
    pub product_id: Option<i32>,
}

impl Suggestion {
    pub fn into_dto(self) -> SuggestionDto {
        SuggestionDto {
            kind: self.kind.as_str().to_string(),
            text: self.text,
            product_id: self.product_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularSearch {
    pub query: String,
    pub count: u64,
}

impl PopularSearch {
    pub fn into_dto(self) -> PopularSearchDto {
        PopularSearchDto {
            query: self.query,
            count: self.count,
        }
    }
}

/// Trimmed, lowercased query, or `None` when it is too short to be useful.
pub fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim().to_lowercase();
    (query.chars().count() >= MIN_QUERY_LEN).then_some(query)
}
