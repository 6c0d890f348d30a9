use super::*;

/// Tests settling an eligible commission.
///
/// Expected: Ok with status settled and the earning credited to the seller's wallet
#[tokio::test]
async fn credits_seller_wallet() -> Result<(), AppError> {
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

    let settled = CommissionService::new(db).settle(commission.id).await?;

    assert_eq!(settled.status, CommissionStatus::Settled);
    assert_eq!(settled.final_settlement, Some(commission.seller_earning));
    let wallet = WalletService::new(db).wallet(seller.user_id).await?;
    assert_eq!(wallet.balance, commission.seller_earning);

    Ok(())
}

/// Tests settling while a return on the item is open.
///
/// Expected: Err(BadRequest) and the wallet untouched
#[tokio::test]
async fn open_return_blocks_settlement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (order, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
    let commission = factory::create_commission(
        db,
        &item,
        seller.id,
        1_000,
        CommissionStatus::Eligible,
    )
    .await?;
    ReturnRepository::new(db)
        .create(CreateReturnParam {
            order_id: order.id,
            order_item_id: item.id,
            user_id: customer.id,
            seller_id: Some(seller.id),
            quantity: 1,
            reason: "Too small".to_string(),
        })
        .await?;

    let result = CommissionService::new(db).settle(commission.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(WalletService::new(db).wallet(seller.user_id).await?.balance, 0);

    Ok(())
}

/// Tests settling a commission that is still pending.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn pending_commission_is_rejected() -> Result<(), AppError> {
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
        CommissionStatus::Pending,
    )
    .await?;

    let result = CommissionService::new(db).settle(commission.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
