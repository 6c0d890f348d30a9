use sea_orm::DatabaseConnection;

use crate::server::{
    data::wishlist_item::WishlistRepository,
    error::AppError,
    model::{
        cart::{AddCartItemParam, Cart},
        product::Product,
        wishlist::WishlistEntry,
    },
    service::{cart::CartService, flash_sale::FlashSaleService, product::ProductService},
};

pub struct WishlistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WishlistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves a product to the wishlist.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown or archived product
    /// - `Err(AppError::BadRequest)` - Already in the wishlist
    pub async fn add(&self, user_id: i32, product_id: i32) -> Result<WishlistEntry, AppError> {
        let repo = WishlistRepository::new(self.db);

        let product = ProductService::new(self.db).find_active(product_id).await?;
        if repo.contains(user_id, product.id).await? {
            return Err(AppError::bad_request("Product is already in your wishlist"));
        }

        let item = repo.add(user_id, product.id).await?;
        let prices = FlashSaleService::new(self.db)
            .price_book(vec![product.id])
            .await?;

        Ok(WishlistEntry {
            effective_price: prices.effective_price(&product),
            product,
            added_at: item.created_at,
        })
    }

    /// Wishlist entries newest first; archived products are left out.
    pub async fn list(&self, user_id: i32) -> Result<Vec<WishlistEntry>, AppError> {
        let repo = WishlistRepository::new(self.db);

        let mut entries = Vec::new();
        for (item, product) in repo.list_by_user(user_id).await? {
            let Some(product) = product else { continue };
            let product = Product::from_entity(product)?;
            if product.is_active() {
                entries.push((item.created_at, product));
            }
        }

        let prices = FlashSaleService::new(self.db)
            .price_book(entries.iter().map(|(_, p)| p.id).collect())
            .await?;

        Ok(entries
            .into_iter()
            .map(|(added_at, product)| WishlistEntry {
                effective_price: prices.effective_price(&product),
                product,
                added_at,
            })
            .collect())
    }

    pub async fn remove(&self, user_id: i32, product_id: i32) -> Result<(), AppError> {
        let repo = WishlistRepository::new(self.db);

        if repo.remove(user_id, product_id).await? == 0 {
            return Err(AppError::not_found("Product is not in your wishlist"));
        }

        Ok(())
    }

    /// Puts one unit in the cart and takes the product off the wishlist.
    pub async fn move_to_cart(&self, user_id: i32, product_id: i32) -> Result<Cart, AppError> {
        let repo = WishlistRepository::new(self.db);

        if !repo.contains(user_id, product_id).await? {
            return Err(AppError::not_found("Product is not in your wishlist"));
        }

        let cart = CartService::new(self.db)
            .add(
                user_id,
                AddCartItemParam {
                    product_id,
                    quantity: 1,
                    size: None,
                    color: None,
                },
            )
            .await?;
        repo.remove(user_id, product_id).await?;

        Ok(cart)
    }
}
