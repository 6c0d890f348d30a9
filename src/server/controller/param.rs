use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::{
        product::{Gender, ProductFilter, ProductSort, DEFAULT_PER_PAGE, MAX_PER_PAGE},
        ParseEnum,
    },
    util::pagination::clamp_per_page,
};

/// Zero-based page and page size shared by paginated listings.
#[derive(Deserialize, IntoParams)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

impl PaginationParam {
    pub fn per_page(&self) -> u64 {
        clamp_per_page(self.per_page, MAX_PER_PAGE)
    }
}

/// Optional status filter for back-office listings.
#[derive(Deserialize, IntoParams)]
pub struct StatusParam {
    pub status: Option<String>,
}

/// Status and store filters for commission and payout listings.
#[derive(Deserialize, IntoParams)]
pub struct SellerFilterParam {
    pub status: Option<String>,
    pub seller_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
pub struct OrderQueryParam {
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl OrderQueryParam {
    pub fn per_page(&self) -> u64 {
        clamp_per_page(self.per_page, MAX_PER_PAGE)
    }
}

#[derive(Deserialize, IntoParams)]
pub struct SearchParam {
    #[serde(default)]
    pub q: String,
}

/// Storefront product listing query.
#[derive(Deserialize, IntoParams)]
pub struct ProductQueryParam {
    pub category: Option<String>,
    pub gender: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
    #[serde(default)]
    pub in_stock: bool,
    /// `newest` (default), `price_asc`, `price_desc` or `rating`.
    pub sort: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_product_page_size")]
    pub per_page: u64,
}

fn default_product_page_size() -> u64 {
    DEFAULT_PER_PAGE
}

impl ProductQueryParam {
    pub fn into_filter(self) -> Result<ProductFilter, AppError> {
        let gender = parse_filter(self.gender.as_deref(), Gender::parse, "gender")?;
        let sort = parse_filter(self.sort.as_deref(), ProductSort::parse, "sort")?
            .unwrap_or(ProductSort::Newest);

        Ok(ProductFilter {
            category: non_blank(self.category).map(|c| c.to_lowercase()),
            gender,
            brand: non_blank(self.brand),
            min_price: self.min_price,
            max_price: self.max_price,
            search: non_blank(self.search),
            in_stock: self.in_stock,
            sort,
            page: self.page,
            per_page: clamp_per_page(self.per_page, MAX_PER_PAGE),
            ..Default::default()
        })
    }
}

/// Parses an optional query value into an enum; an unknown value is a 400 naming the field.
pub fn parse_filter<T>(
    value: Option<&str>,
    parse: fn(&str) -> Option<T>,
    field: &str,
) -> Result<Option<T>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => parse(value)
            .map(Some)
            .ok_or_else(|| AppError::bad_request(format!("Unknown {}: {}", field, value))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
