//! Database repository layer for all domain entities.
//!
//! Each repository borrows the connection and wraps the SeaORM queries for one table (or one
//! table and its child rows). Repositories return entity models and `DbErr`; services convert
//! the models into domain types. Multi-step invariants that would otherwise need a transaction
//! are expressed as conditional updates whose `rows_affected` tells the caller whether the
//! guarded transition happened.

pub mod abandoned_cart;
pub mod cart_item;
pub mod commission;
pub mod compare_item;
pub mod flash_sale;
pub mod notification;
pub mod offer;
pub mod order;
pub mod payout;
pub mod product;
pub mod return_request;
pub mod review;
pub mod search_history;
pub mod seller;
pub mod user;
pub mod wallet;
pub mod wishlist_item;

#[cfg(test)]
mod test;
