use super::*;

/// Tests dashboard aggregates across commission statuses.
///
/// Expected: reversed commissions ignored, settled and pending earnings split
#[tokio::test]
async fn splits_pending_and_settled_ignoring_reversed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let mut commissions = Vec::new();
    for status in [
        CommissionStatus::Pending,
        CommissionStatus::Settled,
        CommissionStatus::Reversed,
    ] {
        let (_, item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
        commissions.push(factory::create_commission(db, &item, seller.id, 1_000, status).await?);
    }

    let repo = CommissionRepository::new(db);
    let earnings = repo.seller_earnings(seller.id).await?;

    assert_eq!(earnings.gross_sales, commissions[0].amount + commissions[1].amount);
    assert_eq!(earnings.pending_earnings, commissions[0].seller_earning);
    assert_eq!(
        earnings.settled_earnings,
        commissions[1]
            .final_settlement
            .unwrap_or(commissions[1].seller_earning)
    );

    Ok(())
}
