use super::*;

/// Tests that a payout can only be processed once.
///
/// Expected: first Ok(true), second Ok(false), status stays paid
#[tokio::test]
async fn processes_requested_payout_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_approved_seller(db).await?;
    let repo = PayoutRepository::new(db);
    let payout = repo.create(seller.id, 50_000).await?;
    assert_eq!(repo.requested_total().await?, 50_000);

    let first = repo
        .process(payout.id, PayoutStatus::Paid, Some("UTR123".to_string()), None)
        .await?;
    let second = repo
        .process(
            payout.id,
            PayoutStatus::Rejected,
            None,
            Some("duplicate".to_string()),
        )
        .await?;

    assert!(first);
    assert!(!second);
    let stored = repo.find_by_id(payout.id).await?.unwrap();
    assert_eq!(stored.status, PayoutStatus::Paid);
    assert_eq!(stored.reference.as_deref(), Some("UTR123"));
    assert_eq!(repo.requested_total().await?, 0);

    Ok(())
}
