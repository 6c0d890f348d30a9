use super::*;

/// Tests returning part of a delivered line.
///
/// Expected: Ok with a requested return tied to the item's seller
#[tokio::test]
async fn creates_return_for_delivered_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 2).await?;

    let request = ReturnService::new(db)
        .create(customer.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await?;

    assert_eq!(request.status, ReturnStatus::Requested);
    assert_eq!(request.seller_id, Some(seller.id));
    assert_eq!(request.quantity, 1);

    Ok(())
}

/// Tests claiming more units than remain returnable.
///
/// Expected: Err(BadRequest) once the earlier return covers every unit
#[tokio::test]
async fn rejects_units_already_claimed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 2).await?;

    let service = ReturnService::new(db);
    service
        .create(customer.id, item.id, 2, "Too small".to_string(), WINDOW_DAYS)
        .await?;
    let result = service
        .create(customer.id, item.id, 1, "Changed my mind".to_string(), WINDOW_DAYS)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests returning after the window closed.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_after_return_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id)
        .status(OrderStatus::Delivered)
        .delivered_at(Some(Utc::now() - Duration::days(WINDOW_DAYS + 1)))
        .build()
        .await?;
    let item = factory::create_order_item(db, order.id, &product).await?;

    let result = ReturnService::new(db)
        .create(customer.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests returning an item from an order that has not been delivered.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_undelivered_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    let order = factory::create_order(db, customer.id).await?;
    let item = factory::create_order_item(db, order.id, &product).await?;

    let result = ReturnService::new(db)
        .create(customer.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests returning another customer's item.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn other_customers_item_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
    let other = factory::create_user(db).await?;

    let result = ReturnService::new(db)
        .create(other.id, item.id, 1, "Too small".to_string(), WINDOW_DAYS)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
