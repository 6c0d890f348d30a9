use super::*;

/// Tests adding the same variant twice.
///
/// Expected: Ok with a single line capped at 10 units
#[tokio::test]
async fn merges_same_variant_up_to_line_cap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let service = CartService::new(db);
    service.add(user.id, add_param(product.id, 8)).await?;
    let cart = service.add(user.id, add_param(product.id, 5)).await?;

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 10);

    Ok(())
}

/// Tests adding more units than are in stock.
///
/// Expected: Err(BadRequest) and an empty cart
#[tokio::test]
async fn rejects_quantity_above_stock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(2)
        .build()
        .await?;

    let service = CartService::new(db);
    let result = service.add(user.id, add_param(product.id, 3)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get(user.id).await?.is_empty());

    Ok(())
}

/// Tests choosing a size the product does not come in.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let mut param = add_param(product.id, 1);
    param.size = Some("XXL".to_string());
    let result = CartService::new(db).add(user.id, param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that cart lines use the live flash sale price.
///
/// Expected: Ok with the unit price 20% below list price
#[tokio::test]
async fn prices_lines_with_live_flash_sale() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price(100_000)
        .build()
        .await?;
    factory::flash_sale::FlashSaleFactory::new(db)
        .discount_percent(20)
        .product(product.id)
        .build()
        .await?;

    let cart = CartService::new(db)
        .add(user.id, add_param(product.id, 1))
        .await?;

    assert_eq!(cart.lines[0].unit_price, 80_000);
    assert_eq!(cart.subtotal(), 80_000);

    Ok(())
}

/// Tests that adding to the cart refreshes the abandoned-cart snapshot.
///
/// Expected: Ok with an active record holding the line
#[tokio::test]
async fn tracks_abandoned_cart_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    CartService::new(db)
        .add(user.id, add_param(product.id, 2))
        .await?;

    let record = crate::server::data::abandoned_cart::AbandonedCartRepository::new(db)
        .find_by_user(user.id)
        .await?
        .unwrap();
    assert_eq!(record.status, AbandonedCartStatus::Active);
    assert_eq!(record.total, product.price * 2);

    Ok(())
}
