use super::*;

/// Tests creating a customer account.
///
/// Verifies that the repository stores the normalised email and role string.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Seller,
            phone: None,
        })
        .await?;

    assert_eq!(user.email, "meera@example.com");
    assert_eq!(user.role, Role::Seller);

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Copy".to_string(),
            email: existing.email,
            password_hash: "hash".to_string(),
            role: Role::Customer,
            phone: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
