use super::*;

/// Tests that a wallet is created lazily and reused afterwards.
///
/// Expected: Ok with the same wallet id on both calls and a zero balance
#[tokio::test]
async fn creates_once_then_reuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = WalletRepository::new(db);
    let first = repo.get_or_create(user.id).await?;
    let second = repo.get_or_create(user.id).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.balance, 0);

    Ok(())
}
