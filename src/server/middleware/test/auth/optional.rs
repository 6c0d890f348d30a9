use super::*;

/// Tests that anonymous and broken tokens both resolve to no user.
///
/// Expected: Ok(None) without a header and with a garbage token
#[tokio::test]
async fn treats_bad_tokens_as_anonymous() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let empty = HeaderMap::new();
    assert!(AuthGuard::new(db, SECRET, &empty).optional().await?.is_none());

    let mut garbage = HeaderMap::new();
    garbage.insert(AUTHORIZATION, HeaderValue::from_static("Bearer not-a-jwt"));
    assert!(AuthGuard::new(db, SECRET, &garbage)
        .optional()
        .await?
        .is_none());

    Ok(())
}

/// Tests a valid token.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_user_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let headers = bearer(user.id, "customer");

    let found = AuthGuard::new(db, SECRET, &headers).optional().await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}
