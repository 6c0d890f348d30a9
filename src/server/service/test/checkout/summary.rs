use super::*;

/// Tests a cart at the free-shipping threshold.
///
/// Expected: Ok with no shipping fee
#[tokio::test]
async fn waives_shipping_at_threshold() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price(99_900)
        .build()
        .await?;
    factory::create_cart_item(db, user.id, product.id, 1).await?;

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let totals = CheckoutService::new(db, &config, &gateway, &mailer)
        .summary(user.id, None)
        .await?;

    assert_eq!(totals.subtotal, 99_900);
    assert_eq!(totals.shipping_fee, 0);
    assert_eq!(totals.total, 99_900);

    Ok(())
}

/// Tests a small cart below the threshold.
///
/// Expected: Ok with the configured shipping fee added
#[tokio::test]
async fn charges_shipping_below_threshold() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price(19_900)
        .build()
        .await?;
    factory::create_cart_item(db, user.id, product.id, 1).await?;

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let totals = CheckoutService::new(db, &config, &gateway, &mailer)
        .summary(user.id, None)
        .await?;

    assert_eq!(totals.shipping_fee, config.shipping_fee);
    assert_eq!(totals.total, 19_900 + config.shipping_fee);

    Ok(())
}

/// Tests the best automatic offer being applied without a code.
///
/// Expected: Ok with the larger of two automatic discounts
#[tokio::test]
async fn applies_best_automatic_offer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price(200_000)
        .build()
        .await?;
    factory::create_cart_item(db, user.id, product.id, 1).await?;
    factory::offer::OfferFactory::new(db)
        .code(None)
        .automatic(true)
        .kind(OfferType::Fixed, 5_000)
        .build()
        .await?;
    factory::offer::OfferFactory::new(db)
        .code(None)
        .automatic(true)
        .kind(OfferType::Percentage, 10)
        .build()
        .await?;

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let totals = CheckoutService::new(db, &config, &gateway, &mailer)
        .summary(user.id, None)
        .await?;

    assert_eq!(totals.discount, 20_000);

    Ok(())
}

/// Tests an unknown offer code.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_code_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    factory::create_cart_item(db, user.id, product.id, 1).await?;

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let result = CheckoutService::new(db, &config, &gateway, &mailer)
        .summary(user.id, Some("NOPE"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
