use super::*;

/// Tests listing reviews of one product.
///
/// Expected: newest first, reviews of other products excluded
#[tokio::test]
async fn newest_first_for_one_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    let other = factory::create_product(db).await?;

    let repo = ReviewRepository::new(db);
    let first = repo
        .create(product.id, user.id, 5, "Great".to_string())
        .await?;
    let second = repo
        .create(product.id, user.id, 3, "Shrank a bit".to_string())
        .await?;
    repo.create(other.id, user.id, 1, "Wrong colour".to_string())
        .await?;

    let reviews = repo.list_by_product(product.id).await?;

    let ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
