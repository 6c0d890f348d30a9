//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They:
//!
//! - **Apply Business Rules**: validation, state transitions and money calculations
//! - **Orchestrate**: coordinate several repositories and the outbound integrations
//! - **Convert**: turn entity models into domain models with `from_entity`
//!
//! Each service borrows the database connection for the duration of a request. Multi-step
//! operations rely on guarded conditional updates rather than transactions.

pub mod abandoned_cart;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod chat;
pub mod checkout;
pub mod commission;
pub mod compare;
pub mod flash_sale;
pub mod notification;
pub mod offer;
pub mod order;
pub mod payout;
pub mod product;
pub mod returns;
pub mod search;
pub mod seller;
pub mod wallet;
pub mod wishlist;

#[cfg(test)]
mod test;
