use super::*;

/// Tests that customers alone don't count as an admin.
///
/// Expected: Ok(false) until an admin is created, then Ok(true)
#[tokio::test]
async fn detects_admin_only_after_one_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    factory::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
