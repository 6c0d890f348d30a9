//! SeaORM entity definitions for the Threadline marketplace.
//!
//! One module per table. Money columns hold integer minor currency units. Status columns are typed
//! with `DeriveActiveEnum` enums stored as lowercase text.

pub mod prelude;

pub mod abandoned_cart;
pub mod cart_item;
pub mod commission;
pub mod compare_item;
pub mod flash_sale;
pub mod flash_sale_product;
pub mod notification;
pub mod offer;
pub mod order;
pub mod order_item;
pub mod payout;
pub mod product;
pub mod return_request;
pub mod review;
pub mod search_history;
pub mod seller;
pub mod user;
pub mod wallet;
pub mod wallet_transaction;
pub mod wishlist_item;
