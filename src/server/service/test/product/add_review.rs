use super::*;

/// Tests two customers reviewing the same product.
///
/// Expected: both reviews stored, rating total and count folded into the product
#[tokio::test]
async fn folds_ratings_into_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = User::from_entity(factory::create_user(db).await?);
    let ravi = User::from_entity(factory::create_user(db).await?);
    let product = factory::create_product(db).await?;

    let service = ProductService::new(db);
    let review = service
        .add_review(&ana, product.id, 5, "  Fits well ".to_string())
        .await?;
    service
        .add_review(&ravi, product.id, 2, "Faded after one wash".to_string())
        .await?;

    assert_eq!(review.comment, "Fits well");
    assert_eq!(review.user_name, ana.name);
    let stored = service.find_active(product.id).await?;
    assert_eq!(stored.rating_total, 7);
    assert_eq!(stored.review_count, 2);
    assert_eq!(stored.rating(), 3.5);
    assert_eq!(service.list_reviews(product.id).await?.len(), 2);

    Ok(())
}

/// Tests the same customer reviewing a product twice.
///
/// Expected: Err(BadRequest), with the first rating kept alone
#[tokio::test]
async fn one_review_per_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let product = factory::create_product(db).await?;

    let service = ProductService::new(db);
    service
        .add_review(&user, product.id, 4, "Nice".to_string())
        .await?;
    let result = service
        .add_review(&user, product.id, 1, "Changed my mind".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = service.find_active(product.id).await?;
    assert_eq!(stored.rating_total, 4);
    assert_eq!(stored.review_count, 1);

    Ok(())
}

/// Tests ratings outside one to five stars and reviews of archived products.
///
/// Expected: Err(BadRequest) for the rating, Err(NotFound) for the archived product
#[tokio::test]
async fn rejects_bad_rating_and_archived_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let product = factory::create_product(db).await?;
    let archived = ProductFactory::new(db)
        .status(ProductStatus::Archived)
        .build()
        .await?;

    let service = ProductService::new(db);
    let too_high = service
        .add_review(&user, product.id, 6, String::new())
        .await;
    let archived_result = service
        .add_review(&user, archived.id, 5, String::new())
        .await;

    assert!(matches!(too_high, Err(AppError::BadRequest(_))));
    assert!(matches!(archived_result, Err(AppError::NotFound(_))));

    Ok(())
}
