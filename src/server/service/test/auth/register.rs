use super::*;

/// Tests registering and then signing in with the same credentials.
///
/// Expected: Ok with a customer account and a token from both calls
#[tokio::test]
async fn registered_customer_can_log_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = Config::for_tests();
    let service = AuthService::new(db, &config);
    let session = service.register(register_param("asha@example.com")).await?;
    let login = service.login("ASHA@example.com ", "correct horse").await?;

    assert_eq!(session.user.role, Role::Customer);
    assert!(!session.token.is_empty());
    assert_eq!(login.user.id, session.user.id);

    Ok(())
}

/// Tests registering an email twice.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn duplicate_email_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = Config::for_tests();
    let service = AuthService::new(db, &config);
    service.register(register_param("asha@example.com")).await?;
    let result = service.register(register_param("asha@example.com")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests signing in with a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn wrong_password_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = Config::for_tests();
    let service = AuthService::new(db, &config);
    service.register(register_param("asha@example.com")).await?;
    let result = service.login("asha@example.com", "wrong horse").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
