use super::*;

/// Tests approving a pending store with a custom rate.
///
/// Expected: Ok with status approved, the new rate and the seller notified
#[tokio::test]
async fn approve_sets_rate_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;

    let config = Config::for_tests();
    let approved = SellerService::new(db, &config)
        .approve(seller.id, Some(750))
        .await?;

    assert_eq!(approved.status, SellerStatus::Approved);
    assert_eq!(approved.commission_rate_bps, 750);
    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].user_id, seller.user_id);

    Ok(())
}

/// Tests rejecting a store that is already approved.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn reject_only_applies_to_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_approved_seller(db).await?;

    let config = Config::for_tests();
    let result = SellerService::new(db, &config)
        .reject(seller.id, Some("Incomplete documents".to_string()))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests suspending an approved store and an out-of-range rate.
///
/// Expected: Ok(suspended) then Err(BadRequest) for 60%
#[tokio::test]
async fn suspend_and_rate_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_approved_seller(db).await?;

    let config = Config::for_tests();
    let service = SellerService::new(db, &config);
    let suspended = service
        .suspend(seller.id, Some("Counterfeit listings".to_string()))
        .await?;
    let result = service.set_commission_rate(seller.id, 6_000).await;

    assert_eq!(suspended.status, SellerStatus::Suspended);
    assert_eq!(suspended.status_note, Some("Counterfeit listings".to_string()));
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
