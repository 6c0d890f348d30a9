use super::*;

/// Tests that a changed snapshot restarts the reminder sequence.
///
/// Expected: reminder_count 0 and status active after the cart changes
#[tokio::test]
async fn resets_reminders_when_items_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = AbandonedCartRepository::new(db);
    let first = repo.upsert(user.id, &[item(1, 1)], 149_900).await?;
    repo.record_reminder(first.id, Utc::now()).await?;
    repo.set_status(user.id, AbandonedCartStatus::Dismissed)
        .await?;

    let updated = repo.upsert(user.id, &[item(1, 2)], 299_800).await?;

    assert_eq!(updated.id, first.id);
    assert_eq!(updated.reminder_count, 0);
    assert!(updated.last_reminded_at.is_none());
    assert_eq!(updated.status, AbandonedCartStatus::Active);
    assert_eq!(updated.total, 299_800);

    Ok(())
}

/// Tests that an unchanged snapshot keeps the reminder count.
///
/// Expected: reminder_count stays 1
#[tokio::test]
async fn keeps_reminders_for_same_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = AbandonedCartRepository::new(db);
    let first = repo.upsert(user.id, &[item(1, 1)], 149_900).await?;
    repo.record_reminder(first.id, Utc::now()).await?;

    let updated = repo.upsert(user.id, &[item(1, 1)], 149_900).await?;

    assert_eq!(updated.reminder_count, 1);

    Ok(())
}
