use super::*;

/// Tests cancelling a confirmed, paid online order.
///
/// Expected: Ok with stock restored, the commission reversed and the total refunded to the
/// customer's wallet
#[tokio::test]
async fn refunds_paid_online_order_to_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id)
        .amounts(product.price, 0, 0)
        .build()
        .await?;
    let item = factory::create_order_item(db, order.id, &product).await?;
    let commission = factory::create_commission(
        db,
        &item,
        seller.id,
        1_000,
        CommissionStatus::Pending,
    )
    .await?;

    let cancelled = OrderService::new(db)
        .cancel_for_user(customer.id, order.id)
        .await?;

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(cancelled.payment_status, PaymentStatus::Refunded);

    let wallet = WalletService::new(db).wallet(customer.id).await?;
    assert_eq!(wallet.balance, product.price);
    assert_eq!(wallet.transactions.len(), 1);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, product.stock + 1);

    let stored = entity::prelude::Commission::find_by_id(commission.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, CommissionStatus::Reversed);

    Ok(())
}

/// Tests cancelling a pending online order that was never paid.
///
/// Expected: Ok with stock untouched and no wallet credit
#[tokio::test]
async fn pending_order_is_not_restocked_or_refunded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id)
        .status(OrderStatus::Pending)
        .payment_status(PaymentStatus::Pending)
        .build()
        .await?;
    factory::create_order_item(db, order.id, &product).await?;

    let cancelled = OrderService::new(db)
        .cancel_for_user(customer.id, order.id)
        .await?;

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(cancelled.payment_status, PaymentStatus::Pending);
    assert_eq!(WalletService::new(db).wallet(customer.id).await?.balance, 0);
    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, product.stock);

    Ok(())
}

/// Tests cancelling a shipped order.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn shipped_order_cannot_be_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id)
        .status(OrderStatus::Shipped)
        .build()
        .await?;

    let result = OrderService::new(db)
        .cancel_for_user(customer.id, order.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests cancelling another customer's order.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn other_customers_order_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let order = factory::create_order(db, owner.id).await?;

    let result = OrderService::new(db).cancel_for_user(other.id, order.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
