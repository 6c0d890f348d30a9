//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert request DTOs into service parameters,
//! call the service layer and convert the result back into response DTOs. Each handler carries
//! a `utoipa::path` annotation that feeds the OpenAPI document built in `router`.

pub mod abandoned_cart;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod chat;
pub mod checkout;
pub mod compare;
pub mod health;
pub mod notification;
pub mod offer;
pub mod order;
pub mod param;
pub mod product;
pub mod returns;
pub mod search;
pub mod seller;
pub mod wallet;
pub mod wishlist;

#[cfg(test)]
mod test;
