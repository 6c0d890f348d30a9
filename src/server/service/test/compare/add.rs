use super::*;

/// Tests filling the comparison list and adding one more product.
///
/// Expected: four products listed in insertion order, then Err(BadRequest)
#[tokio::test]
async fn rejects_fifth_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = CompareService::new(db);
    let mut ids = Vec::new();
    for _ in 0..MAX_COMPARE_ITEMS {
        let product = factory::create_product(db).await?;
        service.add(user.id, product.id).await?;
        ids.push(product.id);
    }
    let extra = factory::create_product(db).await?;

    let result = service.add(user.id, extra.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let listed: Vec<i32> = service
        .get(user.id)
        .await?
        .products
        .iter()
        .map(|p| p.product.id)
        .collect();
    assert_eq!(listed, ids);

    Ok(())
}

/// Tests comparing the same product twice.
///
/// Expected: Err(BadRequest) and a single entry
#[tokio::test]
async fn rejects_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let service = CompareService::new(db);
    service.add(user.id, product.id).await?;
    let result = service.add(user.id, product.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(user.id).await?.products.len(), 1);

    Ok(())
}

/// Tests that an archived product frees its comparison slot.
///
/// Expected: Ok adding a fifth product once one of the four is archived
#[tokio::test]
async fn archived_product_does_not_hold_a_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = CompareService::new(db);
    let mut ids = Vec::new();
    for _ in 0..MAX_COMPARE_ITEMS {
        let product = factory::create_product(db).await?;
        service.add(user.id, product.id).await?;
        ids.push(product.id);
    }
    ProductRepository::new(db)
        .set_status(ids[0], ProductStatus::Archived)
        .await?;
    let replacement = factory::create_product(db).await?;

    let comparison = service.add(user.id, replacement.id).await?;

    assert_eq!(comparison.products.len(), MAX_COMPARE_ITEMS);
    assert!(comparison.products.iter().all(|p| p.product.id != ids[0]));
    assert_eq!(comparison.products[MAX_COMPARE_ITEMS - 1].product.id, replacement.id);

    Ok(())
}

/// Tests comparing an archived product.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn archived_product_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .status(ProductStatus::Archived)
        .build()
        .await?;

    let result = CompareService::new(db).add(user.id, product.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
