use super::*;

/// Tests requesting a payout within the balance.
///
/// Expected: Ok with a requested payout and the wallet debited
#[tokio::test]
async fn debits_wallet_immediately() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = Seller::from_entity(factory::create_approved_seller(db).await?);
    factory::create_wallet(db, seller.user_id, 50_000).await?;

    let payout = PayoutService::new(db).request(&seller, 20_000).await?;

    assert_eq!(payout.status, PayoutStatus::Requested);
    assert_eq!(payout.amount, 20_000);
    assert_eq!(
        WalletService::new(db).wallet(seller.user_id).await?.balance,
        30_000
    );

    Ok(())
}

/// Tests requesting more than the wallet holds.
///
/// Expected: Err(BadRequest) and the balance unchanged
#[tokio::test]
async fn rejects_amount_above_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = Seller::from_entity(factory::create_approved_seller(db).await?);
    factory::create_wallet(db, seller.user_id, 5_000).await?;

    let service = PayoutService::new(db);
    let result = service.request(&seller, 5_001).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(matches!(
        service.request(&seller, 0).await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(
        WalletService::new(db).wallet(seller.user_id).await?.balance,
        5_000
    );

    Ok(())
}
