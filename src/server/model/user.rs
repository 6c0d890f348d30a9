//! User accounts and roles.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::{
    model::auth::{AuthResponseDto, RegisterDto, UserDto},
    server::error::AppError,
};

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 6;

pub use entity::user::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: entity.role,
            phone: entity.phone,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_value(),
            phone: self.phone,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
}

/// Validated sign-up input; the password is still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl RegisterParam {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let (name, email) = validate_credentials(&dto.name, &dto.email, &dto.password)?;

        Ok(Self {
            name,
            email,
            password: dto.password,
            phone: dto.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
        })
    }
}

/// Checks sign-up fields and returns the trimmed name and normalised email.
pub fn validate_credentials(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String), AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Name is required"));
    }
    let email = normalize_email(email);
    if email.len() < 3 || !email.contains('@') {
        return Err(AppError::bad_request("A valid email is required"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    Ok((name.to_string(), email))
}

/// A signed-in user and their bearer token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            token: self.token,
            user: self.user.into_dto(),
        }
    }
}

/// Normalises an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
