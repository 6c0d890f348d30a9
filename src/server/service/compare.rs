use sea_orm::DatabaseConnection;

use crate::server::{
    data::compare_item::CompareRepository,
    error::AppError,
    model::{
        compare::{ComparedProduct, Comparison, MAX_COMPARE_ITEMS},
        product::Product,
    },
    service::{flash_sale::FlashSaleService, product::ProductService},
};

pub struct CompareService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompareService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a product to the comparison list.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown or archived product
    /// - `Err(AppError::BadRequest)` - Already compared, or the list is full
    pub async fn add(&self, user_id: i32, product_id: i32) -> Result<Comparison, AppError> {
        let repo = CompareRepository::new(self.db);

        let product = ProductService::new(self.db).find_active(product_id).await?;
        if repo.contains(user_id, product.id).await? {
            return Err(AppError::bad_request("Product is already being compared"));
        }
        if repo.count_active(user_id).await? >= MAX_COMPARE_ITEMS as u64 {
            return Err(AppError::bad_request(format!(
                "You can compare at most {} products",
                MAX_COMPARE_ITEMS
            )));
        }

        repo.add(user_id, product.id).await?;

        self.get(user_id).await
    }

    /// Compared products in the order they were added.
    pub async fn get(&self, user_id: i32) -> Result<Comparison, AppError> {
        let repo = CompareRepository::new(self.db);

        let mut products = Vec::new();
        for (_, product) in repo.list_by_user(user_id).await? {
            let Some(product) = product else { continue };
            let product = Product::from_entity(product)?;
            if product.is_active() {
                products.push(product);
            }
        }

        let prices = FlashSaleService::new(self.db)
            .price_book(products.iter().map(|p| p.id).collect())
            .await?;

        Ok(Comparison {
            products: products
                .into_iter()
                .map(|product| ComparedProduct {
                    effective_price: prices.effective_price(&product),
                    product,
                })
                .collect(),
        })
    }

    pub async fn remove(&self, user_id: i32, product_id: i32) -> Result<Comparison, AppError> {
        let repo = CompareRepository::new(self.db);

        if repo.remove(user_id, product_id).await? == 0 {
            return Err(AppError::not_found("Product is not being compared"));
        }

        self.get(user_id).await
    }

    pub async fn clear(&self, user_id: i32) -> Result<(), AppError> {
        let repo = CompareRepository::new(self.db);

        repo.clear(user_id).await?;

        Ok(())
    }
}
