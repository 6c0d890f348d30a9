use super::*;

/// Tests storing a review.
///
/// Expected: Ok with the review persisted and reported by exists for that user only
#[tokio::test]
async fn stores_review_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(product.id, user.id, 4, "Soft cotton".to_string())
        .await?;

    assert_eq!(review.product_id, product.id);
    assert_eq!(review.rating, 4);
    assert_eq!(review.comment, "Soft cotton");
    assert!(repo.exists(product.id, user.id).await?);
    assert!(!repo.exists(product.id, other.id).await?);

    Ok(())
}
