use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected request.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token is valid but its user no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Unknown email or wrong password at login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks a required permission.
    ///
    /// # Fields
    /// - User ID
    /// - Description of the permission that failed, for logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token and credential problems are 401; permission failures are 403. Details are logged at
/// debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Authentication required".to_string(),
                )
            }
            Self::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action".to_string(),
            ),
        }
    }
}
