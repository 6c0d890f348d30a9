use crate::server::{
    data::return_request::ReturnRepository,
    model::return_request::{CreateReturnParam, ReturnStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::helpers};

mod claimed_units;
mod transition;

/// Creates a delivered order line of `quantity` units and a `requested` return for `returned`.
async fn create_return(
    db: &sea_orm::DatabaseConnection,
    quantity: i32,
    returned: i32,
) -> Result<(entity::order_item::Model, entity::return_request::Model), DbErr> {
    let (customer, seller, product) = helpers::create_seller_product_and_customer(db).await?;
    let (order, item) = helpers::create_delivered_order(db, &customer, &product, quantity).await?;

    let request = ReturnRepository::new(db)
        .create(CreateReturnParam {
            order_id: order.id,
            order_item_id: item.id,
            user_id: customer.id,
            seller_id: Some(seller.id),
            quantity: returned,
            reason: "Too small".to_string(),
        })
        .await?;

    Ok((item, request))
}
