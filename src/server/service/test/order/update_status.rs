use super::*;

/// Tests delivering a cash-on-delivery order.
///
/// Expected: Ok with delivered_at set, payment collected and the commission eligible
#[tokio::test]
async fn delivery_collects_cod_and_makes_commission_eligible() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id)
        .status(OrderStatus::Shipped)
        .payment_method(PaymentMethod::Cod)
        .payment_status(PaymentStatus::Pending)
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

    let delivered = OrderService::new(db)
        .update_status(order.id, OrderStatus::Delivered)
        .await?;

    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(delivered.payment_status, PaymentStatus::Paid);
    assert!(delivered.delivered_at.is_some());

    let stored = entity::prelude::Commission::find_by_id(commission.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, CommissionStatus::Eligible);

    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].user_id, customer.id);

    Ok(())
}

/// Tests skipping a fulfilment step.
///
/// Expected: Err(BadRequest) and the status unchanged
#[tokio::test]
async fn skipping_a_step_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let order = factory::create_order(db, customer.id).await?;

    let result = OrderService::new(db)
        .update_status(order.id, OrderStatus::Shipped)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Confirmed);

    Ok(())
}
