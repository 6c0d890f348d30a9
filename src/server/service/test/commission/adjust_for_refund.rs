use super::*;

/// Tests refunding one of two units on a settled commission.
///
/// Expected: Ok with the commission still settled at the lower earning and the difference
/// taken from the seller's wallet
#[tokio::test]
async fn settled_commission_claws_back_difference() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 2).await?;
    let commission = factory::create_commission(
        db,
        &item,
        seller.id,
        1_000,
        CommissionStatus::Settled,
    )
    .await?;
    factory::create_wallet(db, seller.user_id, 200_000).await?;

    CommissionService::new(db)
        .adjust_for_refund(item.id, 1)
        .await?;

    let stored = entity::prelude::Commission::find_by_id(commission.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, CommissionStatus::Settled);
    assert_eq!(stored.quantity, 1);
    assert_eq!(stored.final_settlement, Some(stored.seller_earning));

    let delta = commission.seller_earning - stored.seller_earning;
    let wallet = WalletService::new(db).wallet(seller.user_id).await?;
    assert_eq!(wallet.balance, 200_000 - delta);

    Ok(())
}

/// Tests refunding every unit of an unsettled commission.
///
/// Expected: Ok with the commission reversed and no wallet movement
#[tokio::test]
async fn full_refund_reverses_unsettled_commission() -> Result<(), AppError> {
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

    CommissionService::new(db)
        .adjust_for_refund(item.id, 1)
        .await?;

    let stored = entity::prelude::Commission::find_by_id(commission.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, CommissionStatus::Reversed);
    assert_eq!(stored.quantity, 0);
    assert_eq!(stored.seller_earning, 0);
    assert_eq!(WalletService::new(db).wallet(seller.user_id).await?.balance, 0);

    Ok(())
}
