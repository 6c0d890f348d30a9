use super::*;

/// Tests the seller overview across catalog, orders, earnings and wallet.
///
/// Expected: archived products counted only in the total, low stock lists active products
/// at or under the threshold, settled and pending earnings split
#[tokio::test]
async fn summarizes_catalog_orders_and_earnings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let low = ProductFactory::new(db)
        .seller_id(Some(seller.id))
        .stock(LOW_STOCK_THRESHOLD)
        .build()
        .await?;
    ProductFactory::new(db)
        .seller_id(Some(seller.id))
        .stock(0)
        .status(ProductStatus::Archived)
        .build()
        .await?;
    let (_, first) = helpers::create_delivered_order(db, &customer, &product, 2).await?;
    let (_, second) = helpers::create_delivered_order(db, &customer, &low, 1).await?;
    let settled =
        factory::create_commission(db, &first, seller.id, 1_000, CommissionStatus::Settled)
            .await?;
    let pending =
        factory::create_commission(db, &second, seller.id, 1_000, CommissionStatus::Pending)
            .await?;
    factory::create_wallet(db, seller.user_id, 12_345).await?;

    let config = Config::for_tests();
    let dashboard = SellerService::new(db, &config)
        .dashboard(&Seller::from_entity(seller))
        .await?;

    assert_eq!(dashboard.product_count, 3);
    assert_eq!(dashboard.active_product_count, 2);
    assert_eq!(dashboard.order_count, 2);
    assert_eq!(dashboard.earnings.gross_sales, settled.amount + pending.amount);
    assert_eq!(dashboard.earnings.settled_earnings, settled.seller_earning);
    assert_eq!(dashboard.earnings.pending_earnings, pending.seller_earning);
    assert_eq!(dashboard.wallet_balance, 12_345);
    let low_stock: Vec<i32> = dashboard.low_stock.iter().map(|p| p.id).collect();
    assert_eq!(low_stock, vec![low.id]);

    Ok(())
}

/// Tests the overview of a seller with nothing listed yet.
///
/// Expected: zero counts, zero balance without a wallet, no low-stock products
#[tokio::test]
async fn empty_store_has_zeroed_figures() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_approved_seller(db).await?;

    let config = Config::for_tests();
    let dashboard = SellerService::new(db, &config)
        .dashboard(&Seller::from_entity(seller))
        .await?;

    assert_eq!(dashboard.product_count, 0);
    assert_eq!(dashboard.order_count, 0);
    assert_eq!(dashboard.earnings.gross_sales, 0);
    assert_eq!(dashboard.wallet_balance, 0);
    assert!(dashboard.low_stock.is_empty());

    Ok(())
}
