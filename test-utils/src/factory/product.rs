//! Product factory for creating catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::product::{Gender, ProductStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db)
///     .name("Linen Shirt")
///     .category("shirts")
///     .price(149_900)
///     .stock(2)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    seller_id: Option<i32>,
    name: String,
    description: String,
    brand: String,
    category: String,
    gender: Gender,
    price: i64,
    mrp: i64,
    stock: i32,
    sizes: Vec<String>,
    colors: Vec<String>,
    status: ProductStatus,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`, brand `"Threadline"`, category `"tops"`, gender `"unisex"`
    /// - price: `99_900`, mrp: `129_900`, stock: `25`
    /// - sizes: S, M, L; colors: black, white
    /// - status: `active`, no seller
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            seller_id: None,
            name: format!("Product {}", id),
            description: "Soft cotton, relaxed fit".to_string(),
            brand: "Threadline".to_string(),
            category: "tops".to_string(),
            gender: Gender::Unisex,
            price: 99_900,
            mrp: 129_900,
            stock: 25,
            sizes: vec!["S".into(), "M".into(), "L".into()],
            colors: vec!["black".into(), "white".into()],
            status: ProductStatus::Active,
        }
    }

    pub fn seller_id(mut self, seller_id: Option<i32>) -> Self {
        self.seller_id = seller_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the selling price in minor units. MRP is raised to match if it would fall below.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self.mrp = self.mrp.max(price);
        self
    }

    pub fn mrp(mut self, mrp: i64) -> Self {
        self.mrp = mrp;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    pub fn sizes(mut self, sizes: &[&str]) -> Self {
        self.sizes = sizes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn colors(mut self, colors: &[&str]) -> Self {
        self.colors = colors.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            seller_id: ActiveValue::Set(self.seller_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            brand: ActiveValue::Set(self.brand),
            category: ActiveValue::Set(self.category),
            gender: ActiveValue::Set(self.gender),
            price: ActiveValue::Set(self.price),
            mrp: ActiveValue::Set(self.mrp),
            stock: ActiveValue::Set(self.stock),
            sizes: ActiveValue::Set(json!(self.sizes)),
            colors: ActiveValue::Set(json!(self.colors)),
            images: ActiveValue::Set(json!(["https://cdn.example.com/p.jpg"])),
            status: ActiveValue::Set(self.status),
            rating_total: ActiveValue::Set(0),
            review_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, platform-owned product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
