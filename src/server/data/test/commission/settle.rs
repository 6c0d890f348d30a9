use super::*;

/// Tests settling an eligible commission.
///
/// Expected: Ok(true) with status settled and the final settlement stored
#[tokio::test]
async fn settles_eligible_commission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
    let commission = factory::create_commission(
        db,
        &item,
        seller.id,
        1_000,
        CommissionStatus::Eligible,
    )
    .await?;

    let repo = CommissionRepository::new(db);
    let settled = repo
        .settle(commission.id, commission.seller_earning, Utc::now())
        .await?;

    assert!(settled);
    let stored = entity::prelude::Commission::find_by_id(commission.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, CommissionStatus::Settled);
    assert_eq!(stored.final_settlement, Some(commission.seller_earning));
    assert!(stored.settled_at.is_some());

    Ok(())
}

/// Tests that a pending commission cannot be settled.
///
/// Expected: Ok(false) and status unchanged
#[tokio::test]
async fn refuses_pending_commission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
    let commission = factory::create_commission(
        db,
        &item,
        seller.id,
        1_000,
        CommissionStatus::Pending,
    )
    .await?;

    let repo = CommissionRepository::new(db);
    let settled = repo.settle(commission.id, 1, Utc::now()).await?;

    assert!(!settled);
    let stored = entity::prelude::Commission::find_by_id(commission.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, CommissionStatus::Pending);

    Ok(())
}
