use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables in dependency order, then call `build()`. The `with_*_tables` helpers
/// add the table sets the server's services need, each a superset of the ones before it where
/// that makes sense.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Wallet};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Wallet)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables with
    /// foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds user, seller, product and review tables.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Seller)
            .with_table(Product)
            .with_table(Review)
    }

    /// Adds the catalog tables plus cart, wishlist, compare and flash sale tables.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_cart_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_cart_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(CartItem)
            .with_table(WishlistItem)
            .with_table(CompareItem)
            .with_table(FlashSale)
            .with_table(FlashSaleProduct)
            .with_table(Offer)
    }

    /// Adds every table involved in placing and settling orders.
    ///
    /// Includes the cart tables plus orders, order items, commissions, wallets, payouts,
    /// returns, notifications and abandoned carts.
    pub fn with_order_tables(self) -> Self {
        self.with_cart_tables()
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(Commission)
            .with_table(Wallet)
            .with_table(WalletTransaction)
            .with_table(Payout)
            .with_table(ReturnRequest)
            .with_table(Notification)
            .with_table(AbandonedCart)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_order_tables().with_table(SearchHistory)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
