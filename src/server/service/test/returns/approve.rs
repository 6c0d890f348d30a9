use super::*;

/// Tests the owning seller approving a return.
///
/// Expected: Ok with status approved and the customer notified
#[tokio::test]
async fn owning_seller_can_approve() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;

    let service = ReturnService::new(db);
    let request = service
        .create(customer.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await?;
    let approved = service
        .approve(OwnerScope::Seller(seller.id), request.id)
        .await?;

    assert_eq!(approved.status, ReturnStatus::Approved);
    let notifications = entity::prelude::Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|n| n.user_id == customer.id));

    Ok(())
}

/// Tests a seller acting on another seller's return.
///
/// Expected: Err(NotFound) and the return still requested
#[tokio::test]
async fn other_seller_gets_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    let other_seller = factory::create_approved_seller(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;

    let service = ReturnService::new(db);
    let request = service
        .create(customer.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await?;
    let result = service
        .reject(OwnerScope::Seller(other_seller.id), request.id, None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let stored = entity::prelude::ReturnRequest::find_by_id(request.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ReturnStatus::Requested);

    Ok(())
}
