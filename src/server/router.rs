use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        abandoned_cart, admin, auth, cart, chat, checkout, compare, health, notification, offer,
        order, product, returns, search, seller, wallet, wishlist,
    },
    state::AppState,
};

/// Registers the `bearer_auth` scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                Http::builder()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Threadline API",
        version = "0.1.0",
        description = "Multi-vendor fashion storefront, seller portal and back office.\n\n\
            Protected endpoints take `Authorization: Bearer <token>` from the login or \
            register endpoints."
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "auth", description = "Customer accounts"),
        (name = "product", description = "Catalog browsing and reviews"),
        (name = "search", description = "Autocomplete and search history"),
        (name = "cart", description = "Shopping cart"),
        (name = "wishlist", description = "Saved products"),
        (name = "compare", description = "Product comparison"),
        (name = "offer", description = "Coupons and flash sales"),
        (name = "checkout", description = "Order totals, placement and payment"),
        (name = "order", description = "Customer orders"),
        (name = "returns", description = "Return requests"),
        (name = "wallet", description = "Store credit"),
        (name = "notification", description = "In-app notifications"),
        (name = "abandoned-cart", description = "Cart recovery prompts"),
        (name = "chat", description = "Shopping assistant"),
        (name = "seller", description = "Seller portal"),
        (name = "admin", description = "Back office")
    ),
    paths(
        health::health,
        auth::register,
        auth::login,
        auth::me,
        product::list_products,
        product::get_product,
        product::list_reviews,
        product::create_review,
        search::autocomplete,
        search::get_recent,
        search::clear_recent,
        search::get_popular,
        cart::get_cart,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_cart_item,
        cart::clear_cart,
        wishlist::get_wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        wishlist::move_to_cart,
        compare::get_comparison,
        compare::add_to_comparison,
        compare::remove_from_comparison,
        compare::clear_comparison,
        offer::list_offers,
        offer::validate_offer,
        offer::list_flash_sales,
        checkout::summary,
        checkout::create_order,
        checkout::verify_payment,
        order::list_orders,
        order::get_order,
        order::cancel_order,
        returns::list_returns,
        returns::create_return,
        wallet::get_wallet,
        notification::list_notifications,
        notification::mark_read,
        notification::mark_all_read,
        abandoned_cart::get_popup,
        abandoned_cart::dismiss,
        chat::chat,
        seller::register,
        seller::login,
        seller::get_profile,
        seller::update_profile,
        seller::get_dashboard,
        seller::list_products,
        seller::create_product,
        seller::update_product,
        seller::archive_product,
        seller::list_orders,
        seller::list_returns,
        seller::approve_return,
        seller::reject_return,
        seller::list_commissions,
        seller::list_payouts,
        seller::request_payout,
        admin::get_stats,
        admin::list_sellers,
        admin::approve_seller,
        admin::reject_seller,
        admin::suspend_seller,
        admin::settle_seller,
        admin::set_commission_rate,
        admin::list_commissions,
        admin::settle_commission,
        admin::list_payouts,
        admin::complete_payout,
        admin::reject_payout,
        admin::catalog::create_product,
        admin::catalog::update_product,
        admin::catalog::archive_product,
        admin::catalog::list_offers,
        admin::catalog::create_offer,
        admin::catalog::update_offer,
        admin::catalog::delete_offer,
        admin::catalog::list_flash_sales,
        admin::catalog::create_flash_sale,
        admin::catalog::delete_flash_sale,
        admin::order::list_orders,
        admin::order::update_order_status,
        admin::order::list_returns,
        admin::order::approve_return,
        admin::order::reject_return,
        admin::order::pickup_return,
        admin::order::refund_return,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(storefront_routes())
        .merge(account_routes())
        .merge(seller_routes())
        .merge(admin_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

fn storefront_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/products", get(product::list_products))
        .route("/api/products/{id}", get(product::get_product))
        .route(
            "/api/products/{id}/reviews",
            get(product::list_reviews).post(product::create_review),
        )
        .route("/api/search/autocomplete", get(search::autocomplete))
        .route(
            "/api/search/recent",
            get(search::get_recent).delete(search::clear_recent),
        )
        .route("/api/search/popular", get(search::get_popular))
        .route("/api/offers", get(offer::list_offers))
        .route("/api/offers/validate", post(offer::validate_offer))
        .route("/api/flash-sales", get(offer::list_flash_sales))
        .route("/api/chat", post(chat::chat))
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/cart",
            get(cart::get_cart)
                .post(cart::add_to_cart)
                .delete(cart::clear_cart),
        )
        .route(
            "/api/cart/{item_id}",
            put(cart::update_cart_item).delete(cart::remove_cart_item),
        )
        .route(
            "/api/wishlist",
            get(wishlist::get_wishlist).post(wishlist::add_to_wishlist),
        )
        .route(
            "/api/wishlist/{product_id}",
            delete(wishlist::remove_from_wishlist),
        )
        .route(
            "/api/wishlist/{product_id}/move-to-cart",
            post(wishlist::move_to_cart),
        )
        .route(
            "/api/compare",
            get(compare::get_comparison)
                .post(compare::add_to_comparison)
                .delete(compare::clear_comparison),
        )
        .route(
            "/api/compare/{product_id}",
            delete(compare::remove_from_comparison),
        )
        .route("/api/checkout/summary", post(checkout::summary))
        .route("/api/payment/create-order", post(checkout::create_order))
        .route("/api/payment/verify", post(checkout::verify_payment))
        .route("/api/orders", get(order::list_orders))
        .route("/api/orders/{id}", get(order::get_order))
        .route("/api/orders/{id}/cancel", post(order::cancel_order))
        .route(
            "/api/returns",
            get(returns::list_returns).post(returns::create_return),
        )
        .route("/api/wallet", get(wallet::get_wallet))
        .route("/api/notifications", get(notification::list_notifications))
        .route(
            "/api/notifications/read-all",
            post(notification::mark_all_read),
        )
        .route("/api/notifications/{id}/read", post(notification::mark_read))
        .route("/api/abandoned-cart", get(abandoned_cart::get_popup))
        .route("/api/abandoned-cart/dismiss", post(abandoned_cart::dismiss))
}

fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/api/seller/register", post(seller::register))
        .route("/api/seller/login", post(seller::login))
        .route(
            "/api/seller/profile",
            get(seller::get_profile).put(seller::update_profile),
        )
        .route("/api/seller/dashboard", get(seller::get_dashboard))
        .route(
            "/api/seller/products",
            get(seller::list_products).post(seller::create_product),
        )
        .route(
            "/api/seller/products/{id}",
            put(seller::update_product).delete(seller::archive_product),
        )
        .route("/api/seller/orders", get(seller::list_orders))
        .route("/api/seller/returns", get(seller::list_returns))
        .route(
            "/api/seller/returns/{id}/approve",
            post(seller::approve_return),
        )
        .route("/api/seller/returns/{id}/reject", post(seller::reject_return))
        .route("/api/seller/commissions", get(seller::list_commissions))
        .route(
            "/api/seller/payouts",
            get(seller::list_payouts).post(seller::request_payout),
        )
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/stats", get(admin::get_stats))
        .route("/api/admin/sellers", get(admin::list_sellers))
        .route("/api/admin/sellers/{id}/approve", post(admin::approve_seller))
        .route("/api/admin/sellers/{id}/reject", post(admin::reject_seller))
        .route("/api/admin/sellers/{id}/suspend", post(admin::suspend_seller))
        .route("/api/admin/sellers/{id}/settle", post(admin::settle_seller))
        .route(
            "/api/admin/sellers/{id}/commission-rate",
            put(admin::set_commission_rate),
        )
        .route("/api/admin/commissions", get(admin::list_commissions))
        .route(
            "/api/admin/commissions/{id}/settle",
            post(admin::settle_commission),
        )
        .route("/api/admin/payouts", get(admin::list_payouts))
        .route(
            "/api/admin/payouts/{id}/complete",
            post(admin::complete_payout),
        )
        .route("/api/admin/payouts/{id}/reject", post(admin::reject_payout))
        .route("/api/admin/products", post(admin::catalog::create_product))
        .route(
            "/api/admin/products/{id}",
            put(admin::catalog::update_product).delete(admin::catalog::archive_product),
        )
        .route(
            "/api/admin/offers",
            get(admin::catalog::list_offers).post(admin::catalog::create_offer),
        )
        .route(
            "/api/admin/offers/{id}",
            put(admin::catalog::update_offer).delete(admin::catalog::delete_offer),
        )
        .route(
            "/api/admin/flash-sales",
            get(admin::catalog::list_flash_sales).post(admin::catalog::create_flash_sale),
        )
        .route(
            "/api/admin/flash-sales/{id}",
            delete(admin::catalog::delete_flash_sale),
        )
        .route("/api/admin/orders", get(admin::order::list_orders))
        .route(
            "/api/admin/orders/{id}/status",
            put(admin::order::update_order_status),
        )
        .route("/api/admin/returns", get(admin::order::list_returns))
        .route(
            "/api/admin/returns/{id}/approve",
            post(admin::order::approve_return),
        )
        .route(
            "/api/admin/returns/{id}/reject",
            post(admin::order::reject_return),
        )
        .route(
            "/api/admin/returns/{id}/pickup",
            post(admin::order::pickup_return),
        )
        .route(
            "/api/admin/returns/{id}/refund",
            post(admin::order::refund_return),
        )
}
