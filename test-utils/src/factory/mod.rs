//! Factory methods for creating test data.
//!
//! Each factory inserts an entity with sensible defaults and exposes builder methods for the
//! fields tests usually care about. A `create_*` shorthand covers the all-defaults case.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let product = factory::product::ProductFactory::new(&db)
//!     .price(129_900)
//!     .stock(3)
//!     .build()
//!     .await?;
//! ```

pub mod abandoned_cart;
pub mod cart_item;
pub mod commission;
pub mod flash_sale;
pub mod helpers;
pub mod offer;
pub mod order;
pub mod product;
pub mod seller;
pub mod user;
pub mod wallet;

pub use abandoned_cart::create_abandoned_cart;
pub use cart_item::create_cart_item;
pub use commission::create_commission;
pub use flash_sale::create_flash_sale;
pub use offer::create_offer;
pub use order::{create_order, create_order_item};
pub use product::create_product;
pub use seller::{create_approved_seller, create_seller};
pub use user::{create_admin, create_user};
pub use wallet::create_wallet;
