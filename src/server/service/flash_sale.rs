use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{flash_sale::FlashSaleRepository, product::ProductRepository},
    error::AppError,
    model::offer::{CreateFlashSaleParam, FlashSale, PriceBook},
};

pub struct FlashSaleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlashSaleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the live price book for the given products.
    pub async fn price_book(&self, product_ids: Vec<i32>) -> Result<PriceBook, AppError> {
        let repo = FlashSaleRepository::new(self.db);

        let percents = repo.best_live_percent(Utc::now(), product_ids).await?;

        Ok(PriceBook::new(percents))
    }

    /// Creates a flash sale after checking every product exists.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - One of the product ids is unknown
    pub async fn create(&self, param: CreateFlashSaleParam) -> Result<FlashSale, AppError> {
        let product_repo = ProductRepository::new(self.db);
        let repo = FlashSaleRepository::new(self.db);

        let found = product_repo.find_by_ids(param.product_ids.clone()).await?;
        if let Some(missing) = param
            .product_ids
            .iter()
            .find(|id| !found.iter().any(|p| p.id == **id))
        {
            return Err(AppError::bad_request(format!("Product {} does not exist", missing)));
        }

        let (sale, product_ids) = repo.create(param).await?;

        Ok(FlashSale::from_entity(sale, product_ids))
    }

    pub async fn list_all(&self) -> Result<Vec<FlashSale>, AppError> {
        let repo = FlashSaleRepository::new(self.db);

        let sales = repo.list_all().await?;

        Ok(sales
            .into_iter()
            .map(|(sale, ids)| FlashSale::from_entity(sale, ids))
            .collect())
    }

    /// Sales running right now, soonest ending first.
    pub async fn list_live(&self) -> Result<Vec<FlashSale>, AppError> {
        let repo = FlashSaleRepository::new(self.db);

        let sales = repo.list_live(Utc::now()).await?;

        Ok(sales
            .into_iter()
            .map(|(sale, ids)| FlashSale::from_entity(sale, ids))
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = FlashSaleRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(AppError::not_found("Flash sale not found"));
        }

        Ok(())
    }
}
