use super::*;

/// Tests settling every eligible commission of a seller.
///
/// Expected: Ok counting only the eligible commission without an open return
#[tokio::test]
async fn skips_pending_and_blocked_commissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (_, settleable) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
    let (_, pending) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
    let (blocked_order, blocked) =
        helpers::create_delivered_order(db, &customer, &product, 1).await?;
    let expected = factory::create_commission(
        db,
        &settleable,
        seller.id,
        1_000,
        CommissionStatus::Eligible,
    )
    .await?;
    factory::create_commission(db, &pending, seller.id, 1_000, CommissionStatus::Pending).await?;
    factory::create_commission(db, &blocked, seller.id, 1_000, CommissionStatus::Eligible).await?;
    ReturnRepository::new(db)
        .create(CreateReturnParam {
            order_id: blocked_order.id,
            order_item_id: blocked.id,
            user_id: customer.id,
            seller_id: Some(seller.id),
            quantity: 1,
            reason: "Wrong colour".to_string(),
        })
        .await?;

    let settlement = CommissionService::new(db).settle_all(seller.id).await?;

    assert_eq!(settlement.settled_count, 1);
    assert_eq!(settlement.settled_total, expected.seller_earning);
    assert_eq!(
        WalletService::new(db).wallet(seller.user_id).await?.balance,
        expected.seller_earning
    );

    Ok(())
}
