use super::*;

/// Tests that users can only mark their own notifications.
///
/// Expected: Ok(0) for another user's notification, Ok(1) for own
#[tokio::test]
async fn marks_only_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParam::new(
            owner.id,
            NotificationKind::Order,
            "Order shipped",
            "Your order is on the way",
        ))
        .await?;

    assert_eq!(repo.mark_read(stranger.id, notification.id).await?, 0);
    assert_eq!(repo.count_unread(owner.id).await?, 1);
    assert_eq!(repo.mark_read(owner.id, notification.id).await?, 1);
    assert_eq!(repo.count_unread(owner.id).await?, 0);

    Ok(())
}

/// Tests marking everything read.
///
/// Expected: Ok(2) then no unread notifications
#[tokio::test]
async fn marks_all_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = NotificationRepository::new(db);
    for title in ["Order placed", "Order shipped"] {
        repo.create(CreateNotificationParam::new(
            user.id,
            NotificationKind::Order,
            title,
            "Details inside",
        ))
        .await?;
    }

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.count_unread(user.id).await?, 0);

    Ok(())
}
