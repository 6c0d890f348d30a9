use super::*;

/// Tests saving a product twice.
///
/// Expected: Ok then Err(BadRequest), with one entry listed
#[tokio::test]
async fn duplicate_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let service = WishlistService::new(db);
    let entry = service.add(user.id, product.id).await?;
    let result = service.add(user.id, product.id).await;

    assert_eq!(entry.product.id, product.id);
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.list(user.id).await?.len(), 1);

    Ok(())
}

/// Tests saving a product that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_product_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = WishlistService::new(db).add(user.id, 9_999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
