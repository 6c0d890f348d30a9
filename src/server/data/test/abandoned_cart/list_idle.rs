use super::*;

/// Tests selecting carts idle past the cutoff.
///
/// Expected: Ok with only the old active record
#[tokio::test]
async fn returns_only_idle_active_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let idle_user = factory::create_user(db).await?;
    let fresh_user = factory::create_user(db).await?;
    let recovered_user = factory::create_user(db).await?;
    let idle = factory::create_abandoned_cart(db, idle_user.id, now - Duration::hours(3), 0).await?;
    factory::create_abandoned_cart(db, fresh_user.id, now - Duration::minutes(5), 0).await?;
    factory::create_abandoned_cart(db, recovered_user.id, now - Duration::hours(3), 0).await?;

    let repo = AbandonedCartRepository::new(db);
    repo.set_status(recovered_user.id, AbandonedCartStatus::Recovered)
        .await?;

    let records = repo.list_idle(now - Duration::hours(1)).await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, idle.id);

    Ok(())
}
