use super::*;

/// Tests counting a redemption and finding the coupon by code.
///
/// Expected: used_count goes from 0 to 1
#[tokio::test]
async fn counts_redemption() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let offer = OfferFactory::new(db).code(Some("WELCOME10")).build().await?;
    let repo = OfferRepository::new(db);

    repo.increment_used(offer.id).await?;

    let stored = repo.find_by_code("WELCOME10").await?.unwrap();
    assert_eq!(stored.id, offer.id);
    assert_eq!(stored.used_count, 1);

    Ok(())
}
