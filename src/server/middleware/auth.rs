use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{seller::SellerRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        seller::SellerStatus,
        user::{Role, User},
    },
    util::token,
};

pub enum Permission {
    /// Any authenticated user.
    Customer,
    /// User with the seller role, whatever the state of their profile.
    Seller,
    /// Seller whose profile has been approved by an admin.
    ApprovedSeller,
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            jwt_secret,
            headers,
        }
    }

    /// Resolves the bearer token to a user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403 for the first permission that fails
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(bearer) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };
        let user_id = token::verify(self.jwt_secret, bearer)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = User::from_entity(user);

        for permission in permissions {
            match permission {
                Permission::Customer => {}
                Permission::Seller => {
                    if user.role != Role::Seller {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "seller endpoint requires the seller role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::ApprovedSeller => {
                    let seller = match user.role {
                        Role::Seller => {
                            SellerRepository::new(self.db)
                                .find_by_user_id(user.id)
                                .await?
                        }
                        _ => None,
                    };
                    let approved =
                        seller.is_some_and(|seller| seller.status == SellerStatus::Approved);
                    if !approved {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "seller profile is not approved".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "admin endpoint requires the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// The authenticated user when a valid token is present, `None` otherwise.
    ///
    /// Only database failures are errors; a bad or stale token is treated as anonymous.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        match self.require(&[]).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
