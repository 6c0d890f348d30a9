//! Request and response bodies shared by the HTTP API.
//!
//! Every type here is plain serializable data with an OpenAPI schema. Money fields are integer
//! minor currency units.

pub mod abandoned_cart;
pub mod admin;
pub mod api;
pub mod auth;
pub mod cart;
pub mod chat;
pub mod checkout;
pub mod commission;
pub mod compare;
pub mod notification;
pub mod offer;
pub mod order;
pub mod product;
pub mod returns;
pub mod search;
pub mod seller;
pub mod wallet;
pub mod wishlist;
