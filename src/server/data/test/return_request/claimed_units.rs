use super::*;

/// Tests that rejected returns release their units.
///
/// Expected: claimed units drop to zero after rejection and the item has no open return
#[tokio::test]
async fn excludes_rejected_returns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (item, request) = create_return(db, 3, 2).await?;
    let repo = ReturnRepository::new(db);
    assert_eq!(repo.claimed_units(item.id).await?, 2);
    assert!(repo.has_open_for_item(item.id).await?);

    repo.transition(
        request.id,
        ReturnStatus::Requested,
        ReturnStatus::Rejected,
        Some("Worn".to_string()),
        None,
    )
    .await?;

    assert_eq!(repo.claimed_units(item.id).await?, 0);
    assert!(!repo.has_open_for_item(item.id).await?);

    Ok(())
}
