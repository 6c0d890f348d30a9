mod abandoned_cart;
mod cart_item;
mod commission;
mod flash_sale;
mod notification;
mod offer;
mod order;
mod payout;
mod product;
mod return_request;
mod review;
mod search_history;
mod user;
mod wallet;
