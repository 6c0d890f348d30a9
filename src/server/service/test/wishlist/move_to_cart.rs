use super::*;

/// Tests moving a saved product into the cart.
///
/// Expected: Ok with one unit in the cart and the wishlist empty
#[tokio::test]
async fn moves_single_unit_and_removes_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let service = WishlistService::new(db);
    service.add(user.id, product.id).await?;
    let cart = service.move_to_cart(user.id, product.id).await?;

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 1);
    assert!(service.list(user.id).await?.is_empty());

    Ok(())
}

/// Tests moving a product that was never saved.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unsaved_product_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let result = WishlistService::new(db)
        .move_to_cart(user.id, product.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
