use super::*;

/// Tests creating the configured admin account.
///
/// Expected: Some(admin) on the first call and None on the next
#[tokio::test]
async fn creates_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut config = Config::for_tests();
    config.admin_email = Some("admin@threadline.local".to_string());
    config.admin_password = Some("change-me-now".to_string());

    let service = AuthService::new(db, &config);
    let created = service.bootstrap_admin().await?;
    let again = service.bootstrap_admin().await?;

    let admin = created.unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert!(again.is_none());
    service
        .authenticate("admin@threadline.local", "change-me-now")
        .await?;

    Ok(())
}

/// Tests bootstrapping without credentials configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_without_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = Config::for_tests();
    let created = AuthService::new(db, &config).bootstrap_admin().await?;

    assert!(created.is_none());
    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests an admin email that already belongs to a customer.
///
/// Expected: Ok(None) and the customer keeps its role
#[tokio::test]
async fn leaves_existing_customer_alone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::UserFactory::new(db)
        .email("admin@threadline.local")
        .build()
        .await?;
    let mut config = Config::for_tests();
    config.admin_email = Some(customer.email.clone());
    config.admin_password = Some("change-me-now".to_string());

    let created = AuthService::new(db, &config).bootstrap_admin().await?;

    assert!(created.is_none());
    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}
