use sea_orm::DatabaseConnection;

use crate::server::{
    data::cart_item::CartItemRepository,
    error::AppError,
    model::{
        cart::{normalize_variant, AddCartItemParam, Cart, CartLine, MAX_LINE_QUANTITY},
        product::Product,
    },
    service::{
        abandoned_cart::AbandonedCartService, flash_sale::FlashSaleService,
        product::ProductService,
    },
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the user's cart priced against live flash sales.
    ///
    /// Lines whose product was deleted or archived are left out.
    pub async fn get(&self, user_id: i32) -> Result<Cart, AppError> {
        let repo = CartItemRepository::new(self.db);

        let rows = repo.list_by_user(user_id).await?;

        let mut items = Vec::with_capacity(rows.len());
        for (item, product) in rows {
            let Some(product) = product else { continue };
            let product = Product::from_entity(product)?;
            if product.is_active() {
                items.push((item, product));
            }
        }

        let prices = FlashSaleService::new(self.db)
            .price_book(items.iter().map(|(_, p)| p.id).collect())
            .await?;

        let lines = items
            .into_iter()
            .map(|(item, product)| CartLine {
                id: item.id,
                unit_price: prices.effective_price(&product),
                product,
                quantity: item.quantity,
                size: item.size,
                color: item.color,
            })
            .collect();

        Ok(Cart { lines })
    }

    /// Adds a product variant, merging into an existing line for the same variant.
    ///
    /// A merged line is capped at the per-line maximum.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown or archived product
    /// - `Err(AppError::BadRequest)` - Invalid quantity or variant, or not enough stock
    pub async fn add(&self, user_id: i32, param: AddCartItemParam) -> Result<Cart, AppError> {
        let repo = CartItemRepository::new(self.db);

        if !(1..=MAX_LINE_QUANTITY).contains(&param.quantity) {
            return Err(AppError::bad_request(format!(
                "Quantity must be between 1 and {}",
                MAX_LINE_QUANTITY
            )));
        }
        let product = ProductService::new(self.db)
            .find_active(param.product_id)
            .await?;
        let size = normalize_variant(param.size);
        let color = normalize_variant(param.color);
        check_variant("size", size.as_deref(), &product.sizes)?;
        check_variant("color", color.as_deref(), &product.colors)?;

        match repo
            .find_line(user_id, product.id, size.as_deref(), color.as_deref())
            .await?
        {
            Some(line) => {
                let quantity = (line.quantity + param.quantity).min(MAX_LINE_QUANTITY);
                check_stock(&product, quantity)?;
                repo.set_quantity(line, quantity).await?;
            }
            None => {
                check_stock(&product, param.quantity)?;
                repo.create(
                    user_id,
                    AddCartItemParam {
                        product_id: product.id,
                        quantity: param.quantity,
                        size,
                        color,
                    },
                )
                .await?;
            }
        }

        self.refreshed(user_id).await
    }

    /// Sets a line's quantity; zero removes the line.
    pub async fn update_quantity(
        &self,
        user_id: i32,
        item_id: i32,
        quantity: i32,
    ) -> Result<Cart, AppError> {
        let repo = CartItemRepository::new(self.db);

        if !(0..=MAX_LINE_QUANTITY).contains(&quantity) {
            return Err(AppError::bad_request(format!(
                "Quantity must be between 0 and {}",
                MAX_LINE_QUANTITY
            )));
        }
        let Some(line) = repo.find_by_id(user_id, item_id).await? else {
            return Err(AppError::not_found("Cart item not found"));
        };

        if quantity == 0 {
            repo.delete(user_id, item_id).await?;
        } else {
            let product = ProductService::new(self.db)
                .find_active(line.product_id)
                .await?;
            check_stock(&product, quantity)?;
            repo.set_quantity(line, quantity).await?;
        }

        self.refreshed(user_id).await
    }

    pub async fn remove(&self, user_id: i32, item_id: i32) -> Result<Cart, AppError> {
        let repo = CartItemRepository::new(self.db);

        if repo.delete(user_id, item_id).await? == 0 {
            return Err(AppError::not_found("Cart item not found"));
        }

        self.refreshed(user_id).await
    }

    pub async fn clear(&self, user_id: i32) -> Result<(), AppError> {
        let repo = CartItemRepository::new(self.db);

        repo.clear(user_id).await?;
        AbandonedCartService::new(self.db)
            .track_quietly(user_id, &Cart::default())
            .await;

        Ok(())
    }

    /// Reloads the cart after a change and refreshes the abandoned-cart snapshot.
    async fn refreshed(&self, user_id: i32) -> Result<Cart, AppError> {
        let cart = self.get(user_id).await?;

        AbandonedCartService::new(self.db)
            .track_quietly(user_id, &cart)
            .await;

        Ok(cart)
    }
}

fn check_variant(kind: &str, chosen: Option<&str>, options: &[String]) -> Result<(), AppError> {
    match chosen {
        Some(value) if !options.iter().any(|o| o.eq_ignore_ascii_case(value)) => Err(
            AppError::bad_request(format!("{} {} is not available for this product", kind, value)),
        ),
        _ => Ok(()),
    }
}

fn check_stock(product: &Product, quantity: i32) -> Result<(), AppError> {
    if quantity > product.stock {
        return Err(AppError::bad_request(format!(
            "Only {} of {} left in stock",
            product.stock.max(0),
            product.name
        )));
    }
    Ok(())
}
