use super::*;

/// Tests that overlapping live sales resolve to the largest discount.
///
/// Expected: Ok({product: 30}) ignoring the inactive 50% and ended 60% sales
#[tokio::test]
async fn picks_largest_live_discount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let product = factory::create_product(db).await?;
    let other = factory::create_product(db).await?;
    FlashSaleFactory::new(db)
        .discount_percent(10)
        .product(product.id)
        .build()
        .await?;
    FlashSaleFactory::new(db)
        .discount_percent(30)
        .product(product.id)
        .build()
        .await?;
    FlashSaleFactory::new(db)
        .discount_percent(50)
        .active(false)
        .product(product.id)
        .build()
        .await?;
    FlashSaleFactory::new(db)
        .discount_percent(60)
        .window(now - Duration::days(2), now - Duration::days(1))
        .product(product.id)
        .build()
        .await?;

    let best = FlashSaleRepository::new(db)
        .best_live_percent(now, vec![product.id, other.id])
        .await?;

    assert_eq!(best.get(&product.id), Some(&30));
    assert!(!best.contains_key(&other.id));

    Ok(())
}

/// Tests deleting a sale together with its product links.
///
/// Expected: Ok(1) and no discount afterwards
#[tokio::test]
async fn delete_removes_discount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let sale = factory::create_flash_sale(db, product.id).await?;
    let repo = FlashSaleRepository::new(db);

    assert_eq!(repo.delete(sale.id).await?, 1);
    assert!(repo
        .best_live_percent(Utc::now(), vec![product.id])
        .await?
        .is_empty());

    Ok(())
}
