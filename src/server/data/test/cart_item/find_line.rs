use super::*;

/// Tests that lines are matched on the full variant, including absent size or color.
///
/// Expected: Ok(Some) for the exact variant and Ok(None) for a different size
#[tokio::test]
async fn matches_exact_variant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let repo = CartItemRepository::new(db);
    let line = repo
        .create(
            user.id,
            AddCartItemParam {
                product_id: product.id,
                quantity: 1,
                size: Some("M".to_string()),
                color: None,
            },
        )
        .await?;

    let same = repo.find_line(user.id, product.id, Some("M"), None).await?;
    let other = repo.find_line(user.id, product.id, Some("L"), None).await?;

    assert_eq!(same.map(|l| l.id), Some(line.id));
    assert!(other.is_none());

    Ok(())
}
