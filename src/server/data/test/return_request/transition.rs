use super::*;

/// Tests that the guarded transition applies once.
///
/// Expected: first refund transition Ok(true), second Ok(false)
#[tokio::test]
async fn applies_guarded_transition_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, request) = create_return(db, 2, 1).await?;
    let repo = ReturnRepository::new(db);
    repo.transition(request.id, ReturnStatus::Requested, ReturnStatus::Approved, None, None)
        .await?;
    repo.transition(request.id, ReturnStatus::Approved, ReturnStatus::PickedUp, None, None)
        .await?;

    let first = repo
        .transition(
            request.id,
            ReturnStatus::PickedUp,
            ReturnStatus::Refunded,
            None,
            Some(99_900),
        )
        .await?;
    let second = repo
        .transition(
            request.id,
            ReturnStatus::PickedUp,
            ReturnStatus::Refunded,
            None,
            Some(99_900),
        )
        .await?;

    assert!(first);
    assert!(!second);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, ReturnStatus::Refunded);
    assert_eq!(stored.refund_amount, Some(99_900));

    Ok(())
}

/// Tests that a transition from the wrong status leaves the record alone.
///
/// Expected: Ok(false) and status still requested
#[tokio::test]
async fn ignores_wrong_source_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, request) = create_return(db, 1, 1).await?;
    let repo = ReturnRepository::new(db);

    let moved = repo
        .transition(request.id, ReturnStatus::PickedUp, ReturnStatus::Refunded, None, None)
        .await?;

    assert!(!moved);
    assert_eq!(repo.find_by_id(request.id).await?.unwrap().status, ReturnStatus::Requested);

    Ok(())
}
