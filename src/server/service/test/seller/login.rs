use super::*;

/// Tests registering a store and signing in through the seller endpoint.
///
/// Expected: Ok with a pending store at the default commission rate
#[tokio::test]
async fn registered_seller_can_log_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = Config::for_tests();
    let service = SellerService::new(db, &config);
    let session = service.register(register_param("meera@example.com")).await?;
    let login = service.login("meera@example.com", "handloom-2024").await?;

    assert_eq!(session.user.role, Role::Seller);
    assert_eq!(session.seller.status, SellerStatus::Pending);
    assert_eq!(session.seller.commission_rate_bps, config.default_commission_bps);
    assert_eq!(login.seller.id, session.seller.id);

    Ok(())
}

/// Tests a customer signing in through the seller endpoint.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn customer_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = Config::for_tests();
    AuthService::new(db, &config)
        .register(RegisterParam {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "correct horse".to_string(),
            phone: None,
        })
        .await?;

    let result = SellerService::new(db, &config)
        .login("asha@example.com", "correct horse")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
