use super::*;
use test_utils::factory::product::ProductFactory;

/// Tests taking units out of stock when enough are available.
///
/// Expected: Ok(true) and stock reduced
#[tokio::test]
async fn decrements_available_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = ProductFactory::new(db).stock(5).build().await?;

    let repo = ProductRepository::new(db);
    assert!(repo.decrement_stock(product.id, 3).await?);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 2);

    Ok(())
}

/// Tests that stock never goes negative.
///
/// Expected: Ok(false) and stock unchanged
#[tokio::test]
async fn refuses_to_oversell() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = ProductFactory::new(db).stock(2).build().await?;

    let repo = ProductRepository::new(db);
    assert!(!repo.decrement_stock(product.id, 3).await?);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 2);

    Ok(())
}
