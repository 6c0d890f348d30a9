use super::*;

/// Tests verifying a correctly signed payment.
///
/// Expected: Ok with the order confirmed and paid
#[tokio::test]
async fn valid_signature_confirms_order() -> Result<(), AppError> {
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
    let gateway_order_id = placed.gateway.unwrap().order.id;

    let order = service
        .verify(
            &user,
            VerifyPaymentParam {
                order_id: placed.order.id,
                signature: sign(SECRET, &gateway_order_id, "pay_1"),
                gateway_order_id,
                payment_id: "pay_1".to_string(),
            },
        )
        .await?;

    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.payment_status, PaymentStatus::Paid);
    assert_eq!(order.gateway_payment_id, Some("pay_1".to_string()));

    Ok(())
}

/// Tests verifying a payment whose signature does not match.
///
/// Expected: Err(SignatureMismatch) with the order still pending and its payment failed
#[tokio::test]
async fn tampered_signature_fails_payment() -> Result<(), AppError> {
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
    let gateway_order_id = placed.gateway.unwrap().order.id;

    let result = service
        .verify(
            &user,
            VerifyPaymentParam {
                order_id: placed.order.id,
                signature: sign(SECRET, &gateway_order_id, "pay_1"),
                gateway_order_id,
                payment_id: "pay_2".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::SignatureMismatch(_)))
    ));
    let stored = entity::prelude::Order::find_by_id(placed.order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.payment_status, PaymentStatus::Failed);

    Ok(())
}

/// Tests verifying a payment after the last unit sold out elsewhere.
///
/// Expected: Err(BadRequest) with the order cancelled and the total refunded to the wallet
#[tokio::test]
async fn out_of_stock_after_payment_cancels_and_refunds() -> Result<(), AppError> {
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
    let gateway_order_id = placed.gateway.unwrap().order.id;

    ProductRepository::new(db)
        .decrement_stock(product.id, product.stock)
        .await?;

    let result = service
        .verify(
            &user,
            VerifyPaymentParam {
                order_id: placed.order.id,
                signature: sign(SECRET, &gateway_order_id, "pay_1"),
                gateway_order_id,
                payment_id: "pay_1".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = entity::prelude::Order::find_by_id(placed.order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Cancelled);
    assert_eq!(stored.payment_status, PaymentStatus::Refunded);

    let wallet = WalletService::new(db).wallet(user.id).await?;
    assert_eq!(wallet.balance, placed.order.total);

    Ok(())
}

/// Tests verifying someone else's order.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn other_users_order_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _, product) = helpers::create_seller_product_and_customer(db).await?;
    factory::create_cart_item(db, customer.id, product.id, 1).await?;
    let owner = User::from_entity(customer);
    let stranger = User::from_entity(factory::create_user(db).await?);

    let config = Config::for_tests();
    let gateway = FakePaymentGateway::default();
    let mailer = RecordingMailer::default();
    let service = CheckoutService::new(db, &config, &gateway, &mailer);
    let placed = service
        .create_order(&owner, place(PaymentMethod::Online))
        .await?;
    let gateway_order_id = placed.gateway.unwrap().order.id;

    let result = service
        .verify(
            &stranger,
            VerifyPaymentParam {
                order_id: placed.order.id,
                signature: sign(SECRET, &gateway_order_id, "pay_1"),
                gateway_order_id,
                payment_id: "pay_1".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
