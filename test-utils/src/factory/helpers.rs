//! Shared helper utilities for factory methods.

use entity::order::{OrderStatus, PaymentStatus};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an approved seller with one product and a customer.
///
/// Useful for order and commission tests that need the whole chain.
///
/// # Returns
/// - `Ok((customer, seller, product))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_seller_product_and_customer(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::seller::Model,
        entity::product::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::user::create_user(db).await?;
    let seller = crate::factory::seller::create_approved_seller(db).await?;
    let product = crate::factory::product::ProductFactory::new(db)
        .seller_id(Some(seller.id))
        .build()
        .await?;

    Ok((customer, seller, product))
}

/// Creates a delivered order for `customer` with a single line of `product`.
///
/// # Returns
/// - `Ok((order, item))` - The order and its only line
/// - `Err(DbErr)` - Database error during creation
pub async fn create_delivered_order(
    db: &DatabaseConnection,
    customer: &entity::user::Model,
    product: &entity::product::Model,
    quantity: i32,
) -> Result<(entity::order::Model, entity::order_item::Model), DbErr> {
    let subtotal = product.price * i64::from(quantity);
    let order = crate::factory::order::OrderFactory::new(db, customer.id)
        .status(OrderStatus::Delivered)
        .payment_status(PaymentStatus::Paid)
        .amounts(subtotal, 0, 0)
        .delivered_at(Some(chrono::Utc::now()))
        .build()
        .await?;
    let item = crate::factory::order::OrderItemFactory::new(db, order.id, product)
        .quantity(quantity)
        .build()
        .await?;

    Ok((order, item))
}
