use super::*;

/// Tests that a credit raises the balance and writes a ledger entry.
///
/// Expected: Ok(true), balance increased, one credit transaction
#[tokio::test]
async fn credits_and_records_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = WalletRepository::new(db);
    let applied = repo
        .apply(user.id, LedgerEntry::credit(2_500, "Refund", Some("RET1".to_string())))
        .await?;
    assert!(applied);

    let wallet = repo.get_or_create(user.id).await?;
    let transactions = repo.transactions(wallet.id, 50).await?;
    assert_eq!(wallet.balance, 2_500);
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].kind, TransactionKind::Credit);
    assert_eq!(transactions[0].reference.as_deref(), Some("RET1"));

    Ok(())
}

/// Tests that a debit larger than the balance is refused.
///
/// Expected: Ok(false), balance unchanged, no transaction
#[tokio::test]
async fn refuses_overdraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let wallet = factory::create_wallet(db, user.id, 1_000).await?;

    let repo = WalletRepository::new(db);
    let applied = repo
        .apply(user.id, LedgerEntry::debit(1_001, "Payout", None))
        .await?;

    assert!(!applied);
    let wallet = repo.get_or_create(wallet.user_id).await?;
    assert_eq!(wallet.balance, 1_000);
    assert!(repo.transactions(wallet.id, 50).await?.is_empty());

    Ok(())
}
