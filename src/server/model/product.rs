//! Catalog products and reviews.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::{
    model::product::{
        CreateProductDto, PaginatedProductsDto, ProductDto, ProductSummaryDto, ReviewDto,
        UpdateProductDto,
    },
    server::{
        error::AppError,
        model::{from_json_column, offer::PriceBook, ParseEnum},
        util::pagination::total_pages,
    },
};

/// Largest page size accepted by product listings.
pub const MAX_PER_PAGE: u64 = 100;
/// Page size used when the client doesn't ask for one.
pub const DEFAULT_PER_PAGE: u64 = 12;
/// Upper bound for prices and MRPs in minor units. Keeps line totals, fees and discounts
/// inside `i64`.
pub const MAX_PRICE: i64 = 10_000_000_000;

pub use entity::product::{Gender, ProductStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub seller_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub gender: Gender,
    pub price: i64,
    pub mrp: i64,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub images: Vec<String>,
    pub status: ProductStatus,
    pub rating_total: i32,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            seller_id: entity.seller_id,
            name: entity.name,
            description: entity.description,
            brand: entity.brand,
            category: entity.category,
            gender: entity.gender,
            price: entity.price,
            mrp: entity.mrp,
            stock: entity.stock,
            sizes: from_json_column("product.sizes", entity.sizes)?,
            colors: from_json_column("product.colors", entity.colors)?,
            images: from_json_column("product.images", entity.images)?,
            status: entity.status,
            rating_total: entity.rating_total,
            review_count: entity.review_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Average rating rounded to one decimal; 0 without reviews.
    pub fn rating(&self) -> f64 {
        if self.review_count <= 0 {
            return 0.0;
        }
        let average = f64::from(self.rating_total) / f64::from(self.review_count);
        (average * 10.0).round() / 10.0
    }

    pub fn first_image(&self) -> Option<String> {
        self.images.first().cloned()
    }

    pub fn summary(&self, effective_price: i64) -> ProductSummaryDto {
        ProductSummaryDto {
            id: self.id,
            name: self.name.clone(),
            brand: self.brand.clone(),
            price: self.price,
            effective_price,
            mrp: self.mrp,
            image: self.first_image(),
            in_stock: self.stock > 0,
        }
    }

    pub fn into_dto(self, effective_price: i64) -> ProductDto {
        ProductDto {
            rating: self.rating(),
            discount_percent: discount_percent(self.mrp, effective_price),
            in_stock: self.stock > 0,
            id: self.id,
            seller_id: self.seller_id,
            name: self.name,
            description: self.description,
            brand: self.brand,
            category: self.category,
            gender: self.gender.to_value(),
            price: self.price,
            effective_price,
            mrp: self.mrp,
            stock: self.stock,
            sizes: self.sizes,
            colors: self.colors,
            images: self.images,
            status: self.status.to_value(),
            review_count: self.review_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Whole-percent discount of `price` relative to `mrp`, rounded down.
pub fn discount_percent(mrp: i64, price: i64) -> i64 {
    if mrp <= 0 || price >= mrp {
        return 0;
    }
    (mrp - price) * 100 / mrp
}

/// Listing order requested through the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl ProductSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(Self::Newest),
            "price_asc" => Some(Self::PriceAsc),
            "price_desc" => Some(Self::PriceDesc),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// Filters for product listings. Storefront listings only ever see active products.
#[derive(Debug, Clone)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub gender: Option<Gender>,
    pub brand: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
    pub in_stock: bool,
    pub seller_id: Option<i32>,
    pub include_archived: bool,
    pub sort: ProductSort,
    pub page: u64,
    pub per_page: u64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            gender: None,
            brand: None,
            min_price: None,
            max_price: None,
            search: None,
            in_stock: false,
            seller_id: None,
            include_archived: false,
            sort: ProductSort::Newest,
            page: 0,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// A product with the price a customer pays right now.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct {
    pub product: Product,
    pub effective_price: i64,
}

impl PricedProduct {
    pub fn into_dto(self) -> ProductDto {
        self.product.into_dto(self.effective_price)
    }
}

/// One page of a product listing, priced against the live flash sales.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub prices: PriceBook,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl ProductPage {
    pub fn into_dto(self) -> PaginatedProductsDto {
        let prices = self.prices;
        PaginatedProductsDto {
            products: self
                .products
                .into_iter()
                .map(|p| {
                    let effective = prices.effective_price(&p);
                    p.into_dto(effective)
                })
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: total_pages(self.total, self.per_page),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParam {
    pub seller_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub gender: Gender,
    pub price: i64,
    pub mrp: i64,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub images: Vec<String>,
}

impl CreateProductParam {
    /// Validates the payload; `seller_id` is the owner decided by the caller's role.
    pub fn from_dto(dto: CreateProductDto, seller_id: Option<i32>) -> Result<Self, AppError> {
        let gender = Gender::parse(&dto.gender).ok_or_else(|| {
            AppError::bad_request("Gender must be one of men, women, unisex, kids")
        })?;
        let param = Self {
            seller_id,
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            brand: dto.brand.trim().to_string(),
            category: dto.category.trim().to_lowercase(),
            gender,
            price: dto.price,
            mrp: dto.mrp,
            stock: dto.stock,
            sizes: dto.sizes,
            colors: dto.colors,
            images: dto.images,
        };
        validate_product_fields(&param.name, param.price, param.mrp, param.stock)?;
        if param.brand.is_empty() || param.category.is_empty() {
            return Err(AppError::bad_request("Brand and category are required"));
        }

        Ok(param)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub gender: Option<Gender>,
    pub price: Option<i64>,
    pub mrp: Option<i64>,
    pub stock: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub status: Option<ProductStatus>,
}

impl UpdateProductParam {
    pub fn from_dto(dto: UpdateProductDto) -> Result<Self, AppError> {
        let gender = match dto.gender {
            Some(g) => Some(Gender::parse(&g).ok_or_else(|| {
                AppError::bad_request("Gender must be one of men, women, unisex, kids")
            })?),
            None => None,
        };
        let status = match dto.status {
            Some(s) => Some(
                ProductStatus::parse(&s)
                    .ok_or_else(|| AppError::bad_request("Status must be active or archived"))?,
            ),
            None => None,
        };

        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            brand: dto.brand.map(|b| b.trim().to_string()),
            category: dto.category.map(|c| c.trim().to_lowercase()),
            gender,
            price: dto.price,
            mrp: dto.mrp,
            stock: dto.stock,
            sizes: dto.sizes,
            colors: dto.colors,
            images: dto.images,
            status,
        })
    }

    /// Validates the merged result of applying this update to `current`.
    pub fn validate_against(&self, current: &Product) -> Result<(), AppError> {
        let name = self.name.as_deref().unwrap_or(&current.name);
        let price = self.price.unwrap_or(current.price);
        let mrp = self.mrp.unwrap_or(current.mrp);
        let stock = self.stock.unwrap_or(current.stock);

        validate_product_fields(name, price, mrp, stock)
    }
}

fn validate_product_fields(name: &str, price: i64, mrp: i64, stock: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::bad_request("Product name is required"));
    }
    if price <= 0 {
        return Err(AppError::bad_request("Price must be greater than zero"));
    }
    if mrp < price {
        return Err(AppError::bad_request("MRP cannot be lower than price"));
    }
    if mrp > MAX_PRICE {
        return Err(AppError::bad_request(format!(
            "Price and MRP cannot exceed {}",
            MAX_PRICE
        )));
    }
    if stock < 0 {
        return Err(AppError::bad_request("Stock cannot be negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model, user_name: String) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            user_id: entity.user_id,
            user_name,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            product_id: self.product_id,
            user_id: self.user_id,
            user_name: self.user_name,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}
