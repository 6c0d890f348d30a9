use super::*;

/// Tests the popup for an idle cart, then after dismissing it.
///
/// Expected: Some before dismissal, None after
#[tokio::test]
async fn shows_idle_cart_until_dismissed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_abandoned_cart(db, user.id, Utc::now() - Duration::hours(2), 0).await?;

    let service = AbandonedCartService::new(db);
    let idle = Duration::minutes(60);
    let shown = service.popup(user.id, idle).await?;
    service.dismiss(user.id).await?;
    let hidden = service.popup(user.id, idle).await?;

    let shown = shown.unwrap();
    assert_eq!(shown.total, 99_800);
    assert_eq!(shown.item_count(), 2);
    assert!(hidden.is_none());

    Ok(())
}

/// Tests a cart that was active moments ago.
///
/// Expected: None
#[tokio::test]
async fn hides_recently_active_cart() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_abandoned_cart(db, user.id, Utc::now() - Duration::minutes(5), 0).await?;

    let popup = AbandonedCartService::new(db)
        .popup(user.id, Duration::minutes(60))
        .await?;

    assert!(popup.is_none());

    Ok(())
}
