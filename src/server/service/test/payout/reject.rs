use super::*;

/// Tests rejecting a requested payout.
///
/// Expected: Ok with status rejected and the amount back in the wallet
#[tokio::test]
async fn returns_amount_to_wallet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = Seller::from_entity(factory::create_approved_seller(db).await?);
    factory::create_wallet(db, seller.user_id, 50_000).await?;

    let service = PayoutService::new(db);
    let payout = service.request(&seller, 20_000).await?;
    let rejected = service
        .reject(payout.id, Some("Bank details missing".to_string()))
        .await?;

    assert_eq!(rejected.status, PayoutStatus::Rejected);
    assert_eq!(rejected.note, Some("Bank details missing".to_string()));
    assert_eq!(
        WalletService::new(db).wallet(seller.user_id).await?.balance,
        50_000
    );

    Ok(())
}

/// Tests processing a payout that was already processed.
///
/// Expected: Err(BadRequest) on the second call
#[tokio::test]
async fn processed_payout_cannot_change_again() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = Seller::from_entity(factory::create_approved_seller(db).await?);
    factory::create_wallet(db, seller.user_id, 50_000).await?;

    let service = PayoutService::new(db);
    let payout = service.request(&seller, 20_000).await?;
    let paid = service.complete(payout.id, "UTR123".to_string()).await?;
    let result = service.reject(payout.id, None).await;

    assert_eq!(paid.status, PayoutStatus::Paid);
    assert_eq!(paid.reference, Some("UTR123".to_string()));
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        WalletService::new(db).wallet(seller.user_id).await?.balance,
        30_000
    );

    Ok(())
}
