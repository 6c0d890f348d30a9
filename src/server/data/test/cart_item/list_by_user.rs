use super::*;

/// Tests that a cart lists only the owner's lines together with their products.
///
/// Expected: Ok with one line carrying its product
#[tokio::test]
async fn lists_own_lines_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_cart_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;
    factory::create_cart_item(db, owner.id, product.id, 2).await?;
    factory::create_cart_item(db, other.id, product.id, 1).await?;

    let repo = CartItemRepository::new(db);
    let lines = repo.list_by_user(owner.id).await?;

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.quantity, 2);
    assert_eq!(lines[0].1.as_ref().map(|p| p.id), Some(product.id));

    Ok(())
}
