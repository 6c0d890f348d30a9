use super::*;

/// Tests the back-office overview over a small marketplace.
///
/// Expected: only paid orders count as revenue, archived products and reversed commissions
/// are left out, open returns and requested payouts are totalled
#[tokio::test]
async fn aggregates_marketplace_figures() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    factory::create_seller(db).await?;
    ProductFactory::new(db)
        .status(ProductStatus::Archived)
        .build()
        .await?;
    let (paid, item) = helpers::create_delivered_order(db, &customer, &product, 2).await?;
    let (_, reversed_item) = helpers::create_delivered_order(db, &customer, &product, 1).await?;
    OrderFactory::new(db, customer.id)
        .payment_status(PaymentStatus::Pending)
        .build()
        .await?;
    let commission =
        factory::create_commission(db, &item, seller.id, 1_000, CommissionStatus::Eligible)
            .await?;
    factory::create_commission(db, &reversed_item, seller.id, 1_000, CommissionStatus::Reversed)
        .await?;
    ReturnRepository::new(db)
        .create(CreateReturnParam {
            order_id: paid.id,
            order_item_id: item.id,
            user_id: customer.id,
            seller_id: Some(seller.id),
            quantity: 1,
            reason: "Too small".to_string(),
        })
        .await?;
    PayoutRepository::new(db).create(seller.id, 5_000).await?;

    let stats = AdminService::new(db).stats().await?;

    assert_eq!(stats.users, 3);
    assert_eq!(stats.customers, 1);
    assert_eq!(stats.sellers, 2);
    assert_eq!(stats.pending_sellers, 1);
    assert_eq!(stats.active_products, 1);
    assert_eq!(stats.orders, 3);
    assert_eq!(stats.revenue, paid.total + product.price);
    assert_eq!(stats.platform_earnings, commission.platform_fee);
    assert_eq!(stats.open_returns, 1);
    assert_eq!(stats.requested_payouts, 5_000);
    assert_eq!(stats.recent_orders.len(), 3);

    Ok(())
}

/// Tests the overview of an empty marketplace.
///
/// Expected: every figure is zero and no recent orders
#[tokio::test]
async fn empty_marketplace_is_all_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = AdminService::new(db).stats().await?;

    assert_eq!(stats.users, 0);
    assert_eq!(stats.orders, 0);
    assert_eq!(stats.revenue, 0);
    assert_eq!(stats.platform_earnings, 0);
    assert_eq!(stats.requested_payouts, 0);
    assert!(stats.recent_orders.is_empty());

    Ok(())
}
