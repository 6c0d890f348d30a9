use super::*;

/// Tests popularity counting across users, including anonymous searches.
///
/// Expected: Ok([("denim", 3), ("kurta", 1)])
#[tokio::test]
async fn counts_searches_across_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = SearchHistoryRepository::new(db);
    repo.record(Some(user.id), "denim".to_string()).await?;
    repo.record(None, "denim".to_string()).await?;
    repo.record(None, "denim".to_string()).await?;
    repo.record(Some(user.id), "kurta".to_string()).await?;

    let popular = repo.popular(Utc::now() - Duration::days(30), 10).await?;

    assert_eq!(
        popular,
        vec![("denim".to_string(), 3), ("kurta".to_string(), 1)]
    );

    Ok(())
}

/// Tests that searches before the window are ignored.
///
/// Expected: Ok(empty) when the window starts in the future
#[tokio::test]
async fn ignores_searches_outside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SearchHistoryRepository::new(db);
    repo.record(None, "denim".to_string()).await?;

    let popular = repo.popular(Utc::now() + Duration::minutes(1), 10).await?;

    assert!(popular.is_empty());

    Ok(())
}
