//! Product catalog repository.
//!
//! Listing, search and autocomplete queries only see `active` products unless asked
//! otherwise. Stock and rating counters are changed with column expressions rather than
//! read-modify-write.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::product::{
    CreateProductParam, ProductFilter, ProductSort, ProductStatus, UpdateProductParam,
};

const AVERAGE_RATING_SQL: &str =
    "CASE WHEN review_count = 0 THEN 0 ELSE CAST(rating_total AS REAL) / review_count END";

/// Repository providing database operations for the product catalog.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an `active` product with no reviews.
    ///
    /// # Arguments
    /// - `param` - Validated product fields and the owning seller, if any
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored product
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateProductParam) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            seller_id: ActiveValue::Set(param.seller_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            brand: ActiveValue::Set(param.brand),
            category: ActiveValue::Set(param.category),
            gender: ActiveValue::Set(param.gender),
            price: ActiveValue::Set(param.price),
            mrp: ActiveValue::Set(param.mrp),
            stock: ActiveValue::Set(param.stock),
            sizes: ActiveValue::Set(serde_json::json!(param.sizes)),
            colors: ActiveValue::Set(serde_json::json!(param.colors)),
            images: ActiveValue::Set(serde_json::json!(param.images)),
            status: ActiveValue::Set(ProductStatus::Active),
            rating_total: ActiveValue::Set(0),
            review_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Loads the products with the given ids in no particular order.
    ///
    /// Ids that don't exist are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::product::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Returns one page of products matching `filter` and the total number of matches.
    ///
    /// Archived products are left out unless `filter.include_archived` is set. Ties in the
    /// requested sort are broken by newest id.
    ///
    /// # Arguments
    /// - `filter` - Attribute filters, search text, sort order and paging
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products on the requested page and the count across all pages
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        filter: &ProductFilter,
    ) -> Result<(Vec<entity::product::Model>, u64), DbErr> {
        use entity::product::Column;

        let mut condition = Condition::all();
        if !filter.include_archived {
            condition = condition.add(Column::Status.eq(ProductStatus::Active));
        }
        if let Some(category) = &filter.category {
            condition = condition.add(Column::Category.eq(category.to_lowercase()));
        }
        if let Some(gender) = filter.gender {
            condition = condition.add(Column::Gender.eq(gender));
        }
        if let Some(brand) = &filter.brand {
            condition = condition.add(Column::Brand.eq(brand.as_str()));
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(Column::Price.lte(max_price));
        }
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(Column::Name.contains(search))
                    .add(Column::Brand.contains(search))
                    .add(Column::Category.contains(search)),
            );
        }
        if filter.in_stock {
            condition = condition.add(Column::Stock.gt(0));
        }
        if let Some(seller_id) = filter.seller_id {
            condition = condition.add(Column::SellerId.eq(seller_id));
        }

        let query = entity::prelude::Product::find().filter(condition);
        let query = match filter.sort {
            ProductSort::Newest => query.order_by_desc(Column::CreatedAt),
            ProductSort::PriceAsc => query.order_by_asc(Column::Price),
            ProductSort::PriceDesc => query.order_by_desc(Column::Price),
            ProductSort::Rating => query.order_by(Expr::cust(AVERAGE_RATING_SQL), Order::Desc),
        }
        .order_by_desc(Column::Id);

        let paginator = query.paginate(self.db, filter.per_page);
        let total = paginator.num_items().await?;
        let products = paginator.fetch_page(filter.page).await?;

        Ok((products, total))
    }

    /// Applies the fields present in `param` to the product.
    ///
    /// # Arguments
    /// - `product` - Current product row
    /// - `param` - Changed fields; `None` fields are left alone
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated product
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        product: entity::product::Model,
        param: UpdateProductParam,
    ) -> Result<entity::product::Model, DbErr> {
        let mut active = product.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(brand) = param.brand {
            active.brand = ActiveValue::Set(brand);
        }
        if let Some(category) = param.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(gender);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(mrp) = param.mrp {
            active.mrp = ActiveValue::Set(mrp);
        }
        if let Some(stock) = param.stock {
            active.stock = ActiveValue::Set(stock);
        }
        if let Some(sizes) = param.sizes {
            active.sizes = ActiveValue::Set(serde_json::json!(sizes));
        }
        if let Some(colors) = param.colors {
            active.colors = ActiveValue::Set(serde_json::json!(colors));
        }
        if let Some(images) = param.images {
            active.images = ActiveValue::Set(serde_json::json!(images));
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Sets a product's status without loading it.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows changed, `0` when the product does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, id: i32, status: ProductStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(entity::product::Column::Status, Expr::value(status.to_value()))
            .col_expr(entity::product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::product::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Takes `quantity` units out of stock only if that many are available.
    ///
    /// # Arguments
    /// - `id` - Product id
    /// - `quantity` - Units to take
    ///
    /// # Returns
    /// - `Ok(true)` - Stock was reduced
    /// - `Ok(false)` - Not enough stock; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement_stock(&self, id: i32, quantity: i32) -> Result<bool, DbErr> {
        use entity::product::Column;

        let result = entity::prelude::Product::update_many()
            .col_expr(Column::Stock, Expr::col(Column::Stock).sub(quantity))
            .filter(Column::Id.eq(id))
            .filter(Column::Stock.gte(quantity))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }

    /// Puts `quantity` units back into stock.
    pub async fn increment_stock(&self, id: i32, quantity: i32) -> Result<(), DbErr> {
        use entity::product::Column;

        entity::prelude::Product::update_many()
            .col_expr(Column::Stock, Expr::col(Column::Stock).add(quantity))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Adds one review's rating to the running totals.
    ///
    /// # Arguments
    /// - `id` - Product id
    /// - `rating` - Rating from 1 to 5
    ///
    /// # Returns
    /// - `Ok(())` - Totals updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_rating(&self, id: i32, rating: i32) -> Result<(), DbErr> {
        use entity::product::Column;

        entity::prelude::Product::update_many()
            .col_expr(Column::RatingTotal, Expr::col(Column::RatingTotal).add(rating))
            .col_expr(Column::ReviewCount, Expr::col(Column::ReviewCount).add(1))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts a seller's products, optionally only the active ones.
    pub async fn count_by_seller(&self, seller_id: i32, active_only: bool) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Product::find()
            .filter(entity::product::Column::SellerId.eq(seller_id));
        if active_only {
            query = query
                .filter(entity::product::Column::Status.eq(ProductStatus::Active));
        }
        query.count(self.db).await
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Status.eq(ProductStatus::Active))
            .count(self.db)
            .await
    }

    /// Active products of a seller with at most `threshold` units left, lowest stock first.
    ///
    /// # Arguments
    /// - `seller_id` - Seller whose catalog to check
    /// - `threshold` - Highest stock level still reported
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Low-stock products
    /// - `Err(DbErr)` - Database error during query
    pub async fn low_stock_by_seller(
        &self,
        seller_id: i32,
        threshold: i32,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::SellerId.eq(seller_id))
            .filter(entity::product::Column::Status.eq(ProductStatus::Active))
            .filter(entity::product::Column::Stock.lte(threshold))
            .order_by_asc(entity::product::Column::Stock)
            .all(self.db)
            .await
    }

    /// Active products whose name contains `query`, newest first.
    ///
    /// # Arguments
    /// - `query` - Substring to match
    /// - `limit` - Maximum number of products
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching products
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_names(
        &self,
        query: &str,
        limit: u64,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Status.eq(ProductStatus::Active))
            .filter(entity::product::Column::Name.contains(query))
            .order_by_desc(entity::product::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Distinct brands of active products containing `query`, alphabetically.
    pub async fn distinct_brands(&self, query: &str, limit: u64) -> Result<Vec<String>, DbErr> {
        entity::prelude::Product::find()
            .select_only()
            .column(entity::product::Column::Brand)
            .distinct()
            .filter(entity::product::Column::Status.eq(ProductStatus::Active))
            .filter(entity::product::Column::Brand.contains(query))
            .order_by_asc(entity::product::Column::Brand)
            .limit(limit)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Distinct categories of active products containing `query`, alphabetically.
    pub async fn distinct_categories(&self, query: &str, limit: u64) -> Result<Vec<String>, DbErr> {
        entity::prelude::Product::find()
            .select_only()
            .column(entity::product::Column::Category)
            .distinct()
            .filter(entity::product::Column::Status.eq(ProductStatus::Active))
            .filter(entity::product::Column::Category.contains(query))
            .order_by_asc(entity::product::Column::Category)
            .limit(limit)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Active, in-stock products matching any keyword in name, brand or category.
    ///
    /// Results are ordered by average rating, best first.
    ///
    /// # Arguments
    /// - `keywords` - Words pulled from the shopper's message
    /// - `limit` - Maximum number of products
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching products, empty when there are no keywords
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_keywords(
        &self,
        keywords: &[String],
        limit: u64,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        use entity::product::Column;

        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let mut any = Condition::any();
        for keyword in keywords {
            any = any
                .add(Column::Name.contains(keyword))
                .add(Column::Brand.contains(keyword))
                .add(Column::Category.contains(keyword));
        }

        entity::prelude::Product::find()
            .filter(Column::Status.eq(ProductStatus::Active))
            .filter(Column::Stock.gt(0))
            .filter(any)
            .order_by(Expr::cust(AVERAGE_RATING_SQL), Order::Desc)
            .limit(limit)
            .all(self.db)
            .await
    }
}
