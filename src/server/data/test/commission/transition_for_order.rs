use super::*;

/// Tests making an order's pending commissions eligible on delivery.
///
/// Expected: Ok(1) and the commission moved to eligible
#[tokio::test]
async fn moves_only_matching_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (order, item) = helpers::create_delivered_order(db, &customer, &product, 2).await?;
    let commission = factory::create_commission(
        db,
        &item,
        seller.id,
        1_000,
        CommissionStatus::Pending,
    )
    .await?;

    let repo = CommissionRepository::new(db);
    let moved = repo
        .transition_for_order(order.id, CommissionStatus::Pending, CommissionStatus::Eligible)
        .await?;
    let moved_again = repo
        .transition_for_order(order.id, CommissionStatus::Pending, CommissionStatus::Eligible)
        .await?;

    assert_eq!(moved, 1);
    assert_eq!(moved_again, 0);
    let stored = repo.find_by_id(commission.id).await?.unwrap();
    assert_eq!(stored.status, CommissionStatus::Eligible);

    Ok(())
}
