use super::*;

/// Tests that only active offers inside their window are listed.
///
/// Expected: Ok with just the running coupon
#[tokio::test]
async fn excludes_inactive_and_expired_offers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let running = OfferFactory::new(db).build().await?;
    OfferFactory::new(db).active(false).build().await?;
    OfferFactory::new(db)
        .window(now - Duration::days(3), now - Duration::days(1))
        .build()
        .await?;
    OfferFactory::new(db)
        .window(now + Duration::days(1), now + Duration::days(3))
        .build()
        .await?;

    let offers = OfferRepository::new(db).list_running(now, false).await?;

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].id, running.id);

    Ok(())
}

/// Tests filtering to automatic promotions.
///
/// Expected: Ok with only the automatic offer
#[tokio::test]
async fn filters_automatic_offers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    OfferFactory::new(db).build().await?;
    let automatic = OfferFactory::new(db)
        .code(None)
        .automatic(true)
        .build()
        .await?;

    let offers = OfferRepository::new(db)
        .list_running(Utc::now(), true)
        .await?;

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].id, automatic.id);

    Ok(())
}
