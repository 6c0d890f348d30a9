use sea_orm::DatabaseConnection;

use crate::server::{
    data::{product::ProductRepository, review::ReviewRepository, user::UserRepository},
    error::AppError,
    model::{
        product::{
            CreateProductParam, PricedProduct, Product, ProductFilter, ProductPage, ProductStatus,
            Review, UpdateProductParam,
        },
        seller::OwnerScope,
        user::User,
    },
    service::{flash_sale::FlashSaleService, search::SearchService},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of storefront products.
    ///
    /// A search by a signed-in shopper is recorded in their search history.
    pub async fn list(
        &self,
        filter: ProductFilter,
        viewer: Option<&User>,
    ) -> Result<ProductPage, AppError> {
        if let (Some(user), Some(search)) = (viewer, filter.search.as_deref()) {
            SearchService::new(self.db).record_quietly(user.id, search).await;
        }

        self.page(ProductFilter {
            include_archived: false,
            ..filter
        })
        .await
    }

    /// Gets a page of a seller's own products, archived ones included.
    pub async fn list_for_seller(
        &self,
        seller_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<ProductPage, AppError> {
        self.page(ProductFilter {
            seller_id: Some(seller_id),
            include_archived: true,
            page,
            per_page,
            ..Default::default()
        })
        .await
    }

    /// Gets an active product with its current price.
    pub async fn get(&self, id: i32) -> Result<PricedProduct, AppError> {
        let product = self.find_active(id).await?;

        self.priced(product).await
    }

    /// Attaches the price after any live flash sale.
    pub async fn priced(&self, product: Product) -> Result<PricedProduct, AppError> {
        let prices = FlashSaleService::new(self.db)
            .price_book(vec![product.id])
            .await?;

        Ok(PricedProduct {
            effective_price: prices.effective_price(&product),
            product,
        })
    }

    /// Finds an active product.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown or archived product
    pub async fn find_active(&self, id: i32) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        let product = match repo.find_by_id(id).await? {
            Some(product) => Product::from_entity(product)?,
            None => return Err(AppError::not_found("Product not found")),
        };
        if !product.is_active() {
            return Err(AppError::not_found("Product not found"));
        }

        Ok(product)
    }

    pub async fn create(&self, param: CreateProductParam) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        let product = repo.create(param).await?;

        Product::from_entity(product)
    }

    /// Updates a product the caller owns.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown product, or one outside the caller's scope
    /// - `Err(AppError::BadRequest)` - The merged values are invalid
    pub async fn update(
        &self,
        scope: OwnerScope,
        id: i32,
        param: UpdateProductParam,
    ) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("Product not found"));
        };
        if !scope.allows(existing.seller_id) {
            return Err(AppError::not_found("Product not found"));
        }
        param.validate_against(&Product::from_entity(existing.clone())?)?;

        let product = repo.update(existing, param).await?;

        Product::from_entity(product)
    }

    /// Archives a product the caller owns; archived products leave the storefront.
    pub async fn archive(&self, scope: OwnerScope, id: i32) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(AppError::not_found("Product not found"));
        };
        if !scope.allows(existing.seller_id) {
            return Err(AppError::not_found("Product not found"));
        }

        repo.set_status(id, ProductStatus::Archived).await?;
        tracing::info!("Product {} archived", id);

        Ok(())
    }

    /// Adds the user's review and folds the rating into the product.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5 or the user already reviewed it
    /// - `Err(AppError::NotFound)` - Unknown or archived product
    pub async fn add_review(
        &self,
        user: &User,
        product_id: i32,
        rating: i32,
        comment: String,
    ) -> Result<Review, AppError> {
        let repo = ProductRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        if !(1..=5).contains(&rating) {
            return Err(AppError::bad_request("Rating must be between 1 and 5"));
        }
        let product = self.find_active(product_id).await?;
        if review_repo.exists(product.id, user.id).await? {
            return Err(AppError::bad_request("You have already reviewed this product"));
        }

        let review = review_repo
            .create(product.id, user.id, rating, comment.trim().to_string())
            .await?;
        repo.add_rating(product.id, rating).await?;

        Ok(Review::from_entity(review, user.name.clone()))
    }

    /// Reviews of an active product, newest first.
    pub async fn list_reviews(&self, product_id: i32) -> Result<Vec<Review>, AppError> {
        let review_repo = ReviewRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let product = self.find_active(product_id).await?;
        let reviews = review_repo.list_by_product(product.id).await?;
        let names = user_repo
            .names_by_ids(reviews.iter().map(|r| r.user_id).collect())
            .await?;

        Ok(reviews
            .into_iter()
            .map(|review| {
                let name = names.get(&review.user_id).cloned().unwrap_or_default();
                Review::from_entity(review, name)
            })
            .collect())
    }

    async fn page(&self, filter: ProductFilter) -> Result<ProductPage, AppError> {
        let repo = ProductRepository::new(self.db);

        let (products, total) = repo.list(&filter).await?;
        let products = products
            .into_iter()
            .map(Product::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        let prices = FlashSaleService::new(self.db)
            .price_book(products.iter().map(|p| p.id).collect())
            .await?;

        Ok(ProductPage {
            products,
            prices,
            total,
            page: filter.page,
            per_page: filter.per_page,
        })
    }
}
