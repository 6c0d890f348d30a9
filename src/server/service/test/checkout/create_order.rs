use super::*;

/// Tests placing a cash-on-delivery order.
///
/// Expected: Ok with a confirmed order, stock taken, cart cleared, one pending commission and a
/// confirmation email
#[tokio::test]
async fn cod_order_is_confirmed_immediately() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    factory::create_cart_item(db, customer.id, product.id, 2).await?;
    let user = User::from_entity(customer);

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let service = CheckoutService::new(db, &config, &gateway, &mailer);
    let placed = service.create_order(&user, place(PaymentMethod::Cod)).await?;

    assert!(placed.gateway.is_none());
    assert_eq!(placed.order.status, OrderStatus::Confirmed);
    assert_eq!(placed.order.payment_status, PaymentStatus::Pending);
    assert!(placed.order.order_number.starts_with("TL"));
    assert_eq!(placed.order.items.len(), 1);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, product.stock - 2);

    let cart_lines = entity::prelude::CartItem::find()
        .filter(entity::cart_item::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(cart_lines, 0);

    let commissions = entity::prelude::Commission::find().all(db).await?;
    assert_eq!(commissions.len(), 1);
    assert_eq!(commissions[0].status, CommissionStatus::Pending);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, user.email);

    Ok(())
}

/// Tests placing an online order.
///
/// Expected: Ok with a pending order, a gateway order for the total and stock untouched
#[tokio::test]
async fn online_order_waits_for_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    factory::create_cart_item(db, customer.id, product.id, 1).await?;
    let user = User::from_entity(customer);

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let service = CheckoutService::new(db, &config, &gateway, &mailer);
    let placed = service
        .create_order(&user, place(PaymentMethod::Online))
        .await?;

    assert_eq!(placed.order.status, OrderStatus::Pending);
    let checkout = placed.gateway.unwrap();
    assert_eq!(checkout.order.amount, placed.order.total);
    assert_eq!(checkout.key_id, "rzp_test_fake");
    assert_eq!(placed.order.gateway_order_id, Some(checkout.order.id));

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, product.stock);
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests checking out with an empty cart.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn empty_cart_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let service = CheckoutService::new(db, &config, &gateway, &mailer);
    let result = service.create_order(&user, place(PaymentMethod::Cod)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a failing mail server does not fail the order.
///
/// Expected: Ok with a confirmed order and nothing recorded as sent
#[tokio::test]
async fn email_failure_does_not_fail_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    factory::create_cart_item(db, customer.id, product.id, 1).await?;
    let user = User::from_entity(customer);

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::failing();
    let service = CheckoutService::new(db, &config, &gateway, &mailer);
    let placed = service.create_order(&user, place(PaymentMethod::Cod)).await?;

    assert_eq!(placed.order.status, OrderStatus::Confirmed);
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests that an offer code is applied and its use counted.
///
/// Expected: Ok with the 10% discount on the order and used_count 1
#[tokio::test]
async fn applies_offer_code_and_counts_use() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    factory::create_cart_item(db, customer.id, product.id, 1).await?;
    let offer = factory::offer::OfferFactory::new(db)
        .code(Some("TEN"))
        .build()
        .await?;
    let user = User::from_entity(customer);

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let service = CheckoutService::new(db, &config, &gateway, &mailer);
    let mut param = place(PaymentMethod::Cod);
    param.offer_code = Some("TEN".to_string());
    let placed = service.create_order(&user, param).await?;

    assert_eq!(placed.order.discount, product.price / 10);
    assert_eq!(placed.order.offer_id, Some(offer.id));
    let stored = entity::prelude::Offer::find_by_id(offer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.used_count, 1);

    Ok(())
}
