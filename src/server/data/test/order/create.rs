use super::*;

/// Tests inserting an order with its line snapshot.
///
/// Expected: Ok with a pending order and one item carrying the seller id
#[tokio::test]
async fn creates_pending_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;

    let repo = OrderRepository::new(db);
    let (order, items) = repo
        .create(CreateOrderParam {
            order_number: "TLABCDEFGHIJ".to_string(),
            user_id: customer.id,
            payment_method: PaymentMethod::Cod,
            subtotal: product.price * 2,
            discount: 0,
            shipping_fee: 0,
            total: product.price * 2,
            offer_id: None,
            shipping_address: address(),
            items: vec![NewOrderItem {
                product_id: product.id,
                seller_id: product.seller_id,
                name: product.name.clone(),
                image: None,
                price: product.price,
                quantity: 2,
                size: Some("M".to_string()),
                color: None,
            }],
        })
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_method, PaymentMethod::Cod);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].seller_id, Some(seller.id));

    let (_, stored_items) = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored_items.len(), 1);

    Ok(())
}
