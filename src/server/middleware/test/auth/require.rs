use super::*;
use test_utils::factory::{seller::SellerFactory, user::UserFactory};

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, SECRET, &headers)
        .require(&[Permission::Customer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer(999, "customer");
    let result = AuthGuard::new(db, SECRET, &headers)
        .require(&[Permission::Customer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests that a token signed with another secret is refused.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let headers = bearer(user.id, "customer");
    let result = AuthGuard::new(db, "another-secret", &headers)
        .require(&[Permission::Customer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that customers cannot reach admin endpoints.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_to_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let headers = bearer(user.id, "customer");
    let result = AuthGuard::new(db, SECRET, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the role is read from the database rather than the token claims.
///
/// Expected: Ok(User) for an admin even if the token says customer
#[tokio::test]
async fn uses_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let headers = bearer(admin.id, "customer");
    let user = AuthGuard::new(db, SECRET, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests that a pending seller passes the seller check but not the approved check.
///
/// Expected: Ok for Seller, Err(AccessDenied) for ApprovedSeller
#[tokio::test]
async fn pending_seller_is_not_approved() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let headers = bearer(seller.user_id, "seller");
    let guard = AuthGuard::new(db, SECRET, &headers);

    assert!(guard.require(&[Permission::Seller]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::ApprovedSeller]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an approved seller.
///
/// Expected: Ok(User) when both seller permissions are required
#[tokio::test]
async fn approved_seller_passes_all_seller_checks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(Role::Seller).build().await?;
    SellerFactory::new(db)
        .user_id(user.id)
        .status(SellerStatus::Approved)
        .build()
        .await?;
    let headers = bearer(user.id, "seller");

    let result = AuthGuard::new(db, SECRET, &headers)
        .require(&[Permission::Seller, Permission::ApprovedSeller])
        .await?;

    assert_eq!(result.id, user.id);

    Ok(())
}
