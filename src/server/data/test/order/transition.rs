use super::*;
use chrono::Utc;
use test_utils::factory::order::OrderFactory;

/// Tests delivering a shipped order.
///
/// Expected: Ok(true) with status delivered and delivered_at set
#[tokio::test]
async fn delivers_shipped_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let order = OrderFactory::new(db, customer.id)
        .status(OrderStatus::Shipped)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let moved = repo
        .transition(
            order.id,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            Some(Utc::now()),
        )
        .await?;

    assert!(moved);
    let (stored, _) = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Delivered);
    assert!(stored.delivered_at.is_some());

    Ok(())
}

/// Tests that a stale source status is rejected.
///
/// Expected: Ok(false) for a confirmed order treated as shipped
#[tokio::test]
async fn refuses_stale_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let order = factory::create_order(db, customer.id).await?;

    let repo = OrderRepository::new(db);
    let moved = repo
        .transition(order.id, OrderStatus::Shipped, OrderStatus::Delivered, None)
        .await?;

    assert!(!moved);

    Ok(())
}
