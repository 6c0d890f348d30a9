use super::*;

/// Tests that repeated queries collapse into one entry ordered by last use.
///
/// Expected: Ok(["kurta", "denim"]) for searches denim, kurta, denim, kurta
#[tokio::test]
async fn returns_distinct_queries_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = SearchHistoryRepository::new(db);
    for query in ["denim", "kurta", "denim", "kurta"] {
        repo.record(Some(user.id), query.to_string()).await?;
    }
    repo.record(Some(other.id), "sneakers".to_string()).await?;

    let recent = repo.recent(user.id, 10).await?;

    assert_eq!(recent, vec!["kurta".to_string(), "denim".to_string()]);

    Ok(())
}

/// Tests clearing a user's history.
///
/// Expected: Ok with empty history afterwards and other users untouched
#[tokio::test]
async fn clear_removes_only_own_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = SearchHistoryRepository::new(db);
    repo.record(Some(user.id), "denim".to_string()).await?;
    repo.record(Some(other.id), "denim".to_string()).await?;

    assert_eq!(repo.clear(user.id).await?, 1);
    assert!(repo.recent(user.id, 10).await?.is_empty());
    assert_eq!(repo.recent(other.id, 10).await?.len(), 1);

    Ok(())
}
