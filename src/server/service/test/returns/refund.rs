use super::*;

/// Tests refunding a picked-up return.
///
/// Expected: Ok with the refund credited, the unit restocked and the commission reversed
#[tokio::test]
async fn refund_credits_wallet_and_restocks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
    let commission = factory::create_commission(
        db,
        &item,
        seller.id,
        1_000,
        CommissionStatus::Eligible,
    )
    .await?;

    let service = ReturnService::new(db);
    let request = service
        .create(customer.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await?;
    service.approve(OwnerScope::Any, request.id).await?;
    service.mark_picked_up(request.id).await?;
    let refunded = service.refund(request.id).await?;

    assert_eq!(refunded.status, ReturnStatus::Refunded);
    assert_eq!(refunded.refund_amount, Some(item.price));
    assert_eq!(
        WalletService::new(db).wallet(customer.id).await?.balance,
        item.price
    );

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

/// Tests refunding the same return twice.
///
/// Expected: Err(BadRequest) on the second call with the wallet credited once
#[tokio::test]
async fn second_refund_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;

    let service = ReturnService::new(db);
    let request = service
        .create(customer.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await?;
    service.approve(OwnerScope::Any, request.id).await?;
    service.mark_picked_up(request.id).await?;
    service.refund(request.id).await?;
    let result = service.refund(request.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        WalletService::new(db).wallet(customer.id).await?.balance,
        item.price
    );

    Ok(())
}

/// Tests refunding a return that has not been picked up.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_pickup_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;

    let service = ReturnService::new(db);
    let request = service
        .create(customer.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await?;
    service.approve(OwnerScope::Any, request.id).await?;
    let result = service.refund(request.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
