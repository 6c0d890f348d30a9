use super::*;
use test_utils::factory::{order::OrderItemFactory, product::ProductFactory};

/// Tests that sellers only see their own lines of shared orders.
///
/// Expected: Ok with one order holding only the seller's item
#[tokio::test]
async fn shows_only_sellers_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let other_seller = factory::create_approved_seller(db).await?;
    let other_product = ProductFactory::new(db)
        .seller_id(Some(other_seller.id))
        .build()
        .await?;

    let order = factory::create_order(db, customer.id).await?;
    let own_item = OrderItemFactory::new(db, order.id, &product).build().await?;
    OrderItemFactory::new(db, order.id, &other_product)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let orders = repo.list_for_seller(seller.id).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].1.len(), 1);
    assert_eq!(orders[0].1[0].id, own_item.id);
    assert_eq!(repo.count_for_seller(seller.id).await?, 1);

    Ok(())
}
