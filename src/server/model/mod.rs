//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the service boundary and into DTOs at
//! the controller boundary. Status enums live on the entity models and are re-exported here.

use sea_orm::ActiveEnum;

pub mod abandoned_cart;
pub mod admin;
pub mod cart;
pub mod chat;
pub mod checkout;
pub mod commission;
pub mod compare;
pub mod notification;
pub mod offer;
pub mod order;
pub mod product;
pub mod return_request;
pub mod search;
pub mod seller;
pub mod user;
pub mod wallet;
pub mod wishlist;

/// Decodes a JSON column into its domain shape.
pub(crate) fn from_json_column<T: serde::de::DeserializeOwned>(
    column: &'static str,
    value: serde_json::Value,
) -> Result<T, crate::server::error::internal::InternalError> {
    serde_json::from_value(value).map_err(|source| {
        crate::server::error::internal::InternalError::InvalidStoredJson { column, source }
    })
}

/// Case-insensitive parsing of request input into a status enum.
///
/// Unknown values give `None`, which callers turn into a validation error.
pub trait ParseEnum: ActiveEnum<Value = String> {
    fn parse(value: &str) -> Option<Self> {
        Self::try_from_value(&value.trim().to_ascii_lowercase()).ok()
    }
}

impl<T: ActiveEnum<Value = String>> ParseEnum for T {}
