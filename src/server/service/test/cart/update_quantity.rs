use super::*;

/// Tests setting a line's quantity to zero.
///
/// Expected: Ok with the line removed
#[tokio::test]
async fn zero_quantity_removes_line() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    let item = factory::create_cart_item(db, user.id, product.id, 2).await?;

    let cart = CartService::new(db)
        .update_quantity(user.id, item.id, 0)
        .await?;

    assert!(cart.is_empty());

    Ok(())
}

/// Tests updating another user's cart line.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn other_users_line_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    let item = factory::create_cart_item(db, owner.id, product.id, 1).await?;

    let result = CartService::new(db)
        .update_quantity(other.id, item.id, 3)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
