mod abandoned_cart;
mod admin;
mod auth;
mod cart;
mod checkout;
mod commission;
mod compare;
mod order;
mod payout;
mod product;
mod returns;
mod search;
mod seller;
mod wishlist;
