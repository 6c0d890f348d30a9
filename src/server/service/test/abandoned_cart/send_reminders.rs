use super::*;

/// Tests emailing an idle cart.
///
/// Expected: Ok(1) with a link to the cart and the reminder recorded
#[tokio::test]
async fn emails_idle_cart_with_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_abandoned_cart(db, user.id, Utc::now() - Duration::hours(2), 0).await?;

    let config = Config::for_tests();
    let mailer = RecordingMailer::default();
    let sent = AbandonedCartService::new(db)
        .send_reminders(&mailer, &config)
        .await?;

    assert_eq!(sent, 1);
    let messages = mailer.sent();
    assert_eq!(messages[0].to, user.email);
    assert!(messages[0].body_text.contains("http://localhost:3000/cart"));
    assert!(messages[0].body_text.contains("Linen Shirt"));

    let record = AbandonedCartRepository::new(db)
        .find_by_user(user.id)
        .await?
        .unwrap();
    assert_eq!(record.reminder_count, 1);
    assert!(record.last_reminded_at.is_some());

    Ok(())
}

/// Tests a cart that is not idle long enough and one that hit the reminder cap.
///
/// Expected: Ok(0) and nothing sent
#[tokio::test]
async fn skips_fresh_and_exhausted_carts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = Config::for_tests();
    let fresh = factory::create_user(db).await?;
    let exhausted = factory::create_user(db).await?;
    factory::create_abandoned_cart(db, fresh.id, Utc::now() - Duration::minutes(10), 0).await?;
    factory::create_abandoned_cart(
        db,
        exhausted.id,
        Utc::now() - Duration::hours(5),
        config.abandoned_cart_max_reminders,
    )
    .await?;

    let mailer = RecordingMailer::default();
    let sent = AbandonedCartService::new(db)
        .send_reminders(&mailer, &config)
        .await?;

    assert_eq!(sent, 0);
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests a failing mail server.
///
/// Expected: Ok(0) and the reminder count unchanged so the next run retries
#[tokio::test]
async fn failed_send_is_not_counted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_abandoned_cart(db, user.id, Utc::now() - Duration::hours(2), 0).await?;

    let config = Config::for_tests();
    let mailer = RecordingMailer::failing();
    let sent = AbandonedCartService::new(db)
        .send_reminders(&mailer, &config)
        .await?;

    assert_eq!(sent, 0);
    let record = AbandonedCartRepository::new(db)
        .find_by_user(user.id)
        .await?
        .unwrap();
    assert_eq!(record.reminder_count, 0);

    Ok(())
}
