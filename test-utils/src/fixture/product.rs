//! Product fixtures for creating in-memory test data.

use chrono::Utc;
use entity::product::{self, Gender, ProductStatus};
use serde_json::json;

/// Default fixture price in minor units.
pub const DEFAULT_PRICE: i64 = 99_900;

/// Default fixture MRP in minor units.
pub const DEFAULT_MRP: i64 = 129_900;

/// Creates an active product entity model with default values.
///
/// # Default Values
/// - id: `1`, no seller
/// - price: `99_900`, mrp: `129_900`, stock: `10`
/// - two reviews totalling 9 stars
///
/// # Example
///
/// ```rust,ignore
/// let product = fixture::product::entity();
/// assert_eq!(product.status, ProductStatus::Active);
/// ```
pub fn entity() -> product::Model {
    entity_builder().build()
}

/// Creates a product entity builder for customization.
pub fn entity_builder() -> ProductEntityBuilder {
    ProductEntityBuilder::default()
}

/// Builder for customized product entity models.
pub struct ProductEntityBuilder {
    id: i32,
    seller_id: Option<i32>,
    price: i64,
    mrp: i64,
    stock: i32,
    status: ProductStatus,
    rating_total: i32,
    review_count: i32,
}

impl Default for ProductEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            seller_id: None,
            price: DEFAULT_PRICE,
            mrp: DEFAULT_MRP,
            stock: 10,
            status: ProductStatus::Active,
            rating_total: 9,
            review_count: 2,
        }
    }
}

impl ProductEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn seller_id(mut self, seller_id: Option<i32>) -> Self {
        self.seller_id = seller_id;
        self
    }

    pub fn price(mut self, price: i64, mrp: i64) -> Self {
        self.price = price;
        self.mrp = mrp;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn reviews(mut self, rating_total: i32, review_count: i32) -> Self {
        self.rating_total = rating_total;
        self.review_count = review_count;
        self
    }

    pub fn build(self) -> product::Model {
        let now = Utc::now();
        product::Model {
            id: self.id,
            seller_id: self.seller_id,
            name: "Fixture Tee".to_string(),
            description: "Soft cotton, relaxed fit".to_string(),
            brand: "Threadline".to_string(),
            category: "tops".to_string(),
            gender: Gender::Unisex,
            price: self.price,
            mrp: self.mrp,
            stock: self.stock,
            sizes: json!(["S", "M", "L"]),
            colors: json!(["black"]),
            images: json!(["https://cdn.example.com/p.jpg"]),
            status: self.status,
            rating_total: self.rating_total,
            review_count: self.review_count,
            created_at: now,
            updated_at: now,
        }
    }
}
