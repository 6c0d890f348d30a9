pub use super::abandoned_cart::Entity as AbandonedCart;
pub use super::cart_item::Entity as CartItem;
pub use super::commission::Entity as Commission;
pub use super::compare_item::Entity as CompareItem;
pub use super::flash_sale::Entity as FlashSale;
pub use super::flash_sale_product::Entity as FlashSaleProduct;
pub use super::notification::Entity as Notification;
pub use super::offer::Entity as Offer;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::payout::Entity as Payout;
pub use super::product::Entity as Product;
pub use super::return_request::Entity as ReturnRequest;
pub use super::review::Entity as Review;
pub use super::search_history::Entity as SearchHistory;
pub use super::seller::Entity as Seller;
pub use super::user::Entity as User;
pub use super::wallet::Entity as Wallet;
pub use super::wallet_transaction::Entity as WalletTransaction;
pub use super::wishlist_item::Entity as WishlistItem;
