use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    config::Config,
    data::{cart_item::CartItemRepository, order::OrderRepository, product::ProductRepository},
    error::{payment::PaymentError, AppError},
    integration::{
        mail::{EmailMessage, Mailer},
        payment::PaymentGateway,
    },
    model::{
        cart::Cart,
        checkout::{
            CheckoutTotals, GatewayCheckout, PlaceOrderParam, PlacedOrder, VerifyPaymentParam,
        },
        notification::{CreateNotificationParam, NotificationKind},
        order::{
            CreateOrderParam, NewOrderItem, Order, OrderStatus, PaymentMethod, PaymentStatus,
        },
        user::User,
    },
    service::{
        abandoned_cart::AbandonedCartService, cart::CartService, commission::CommissionService,
        notification::NotificationService, offer::OfferService, order::OrderService,
    },
    util::order_number,
};

pub struct CheckoutService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
    payment: &'a dyn PaymentGateway,
    mailer: &'a dyn Mailer,
}

impl<'a> CheckoutService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        config: &'a Config,
        payment: &'a dyn PaymentGateway,
        mailer: &'a dyn Mailer,
    ) -> Self {
        Self {
            db,
            config,
            payment,
            mailer,
        }
    }

    /// Prices the user's cart with an offer code, or the best automatic offer without one.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Cart is empty, or the code does not apply
    /// - `Err(AppError::NotFound)` - Unknown offer code
    pub async fn summary(
        &self,
        user_id: i32,
        offer_code: Option<&str>,
    ) -> Result<CheckoutTotals, AppError> {
        let cart = self.non_empty_cart(user_id).await?;

        self.totals(&cart, offer_code).await
    }

    /// Places an order from the cart.
    ///
    /// Online orders stay `pending` until the payment is verified and come back with the gateway
    /// order the storefront widget opens. Cash-on-delivery orders are confirmed right away.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty cart, invalid offer, or not enough stock
    /// - `Err(AppError::PaymentErr)` - The gateway could not create its order
    pub async fn create_order(
        &self,
        user: &User,
        param: PlaceOrderParam,
    ) -> Result<PlacedOrder, AppError> {
        let repo = OrderRepository::new(self.db);

        let cart = self.non_empty_cart(user.id).await?;
        for line in &cart.lines {
            if line.quantity > line.product.stock {
                return Err(AppError::bad_request(format!(
                    "Only {} of {} left in stock",
                    line.product.stock.max(0),
                    line.product.name
                )));
            }
        }
        let totals = self.totals(&cart, param.offer_code.as_deref()).await?;

        let items = cart
            .lines
            .iter()
            .map(|line| NewOrderItem {
                product_id: line.product.id,
                seller_id: line.product.seller_id,
                name: line.product.name.clone(),
                image: line.product.first_image(),
                price: line.unit_price,
                quantity: line.quantity,
                size: line.size.clone(),
                color: line.color.clone(),
            })
            .collect();

        let (order, order_items) = repo
            .create(CreateOrderParam {
                order_number: order_number::generate(),
                user_id: user.id,
                payment_method: param.payment_method,
                subtotal: totals.subtotal,
                discount: totals.discount,
                shipping_fee: totals.shipping_fee,
                total: totals.total,
                offer_id: totals.offer_id(),
                shipping_address: param.shipping_address,
                items,
            })
            .await?;
        tracing::info!(
            "Order {} placed by user {} for {} ({})",
            order.order_number,
            user.id,
            order.total,
            param.payment_method.to_value()
        );

        match param.payment_method {
            PaymentMethod::Online => {
                let gateway_order = self
                    .payment
                    .create_order(order.total, &self.config.currency, &order.order_number)
                    .await?;
                let order = repo
                    .set_gateway_order_id(order, gateway_order.id.clone())
                    .await?;

                Ok(PlacedOrder {
                    order: Order::from_entity(order, order_items)?,
                    gateway: Some(GatewayCheckout {
                        order: gateway_order,
                        key_id: self.payment.key_id().to_string(),
                    }),
                })
            }
            PaymentMethod::Cod => {
                let order = Order::from_entity(order, order_items)?;
                let order = self.finalize(user, order).await?;

                Ok(PlacedOrder {
                    order,
                    gateway: None,
                })
            }
        }
    }

    /// Verifies the widget's payment signature and confirms the order.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Order missing or placed by someone else
    /// - `Err(AppError::BadRequest)` - Order not pending, or gateway order id mismatch
    /// - `Err(AppError::PaymentErr)` - Signature mismatch; the payment is marked failed
    /// - `Err(AppError::BadRequest)` - Paid but out of stock; the order is cancelled and the
    ///   payment refunded to the wallet
    pub async fn verify(&self, user: &User, param: VerifyPaymentParam) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        let order = match repo.find_by_id(param.order_id).await? {
            Some((order, items)) if order.user_id == user.id => Order::from_entity(order, items)?,
            _ => return Err(AppError::not_found("Order not found")),
        };
        if order.status != OrderStatus::Pending {
            return Err(AppError::bad_request("Order is not awaiting payment"));
        }
        if order.gateway_order_id.as_deref() != Some(param.gateway_order_id.as_str()) {
            return Err(AppError::bad_request("Gateway order does not match this order"));
        }

        if !self.payment.verify_signature(
            &param.gateway_order_id,
            &param.payment_id,
            &param.signature,
        ) {
            repo.set_payment_status(order.id, PaymentStatus::Failed, Some(param.payment_id))
                .await?;
            tracing::warn!("Payment signature mismatch for order {}", order.order_number);
            return Err(PaymentError::SignatureMismatch(param.gateway_order_id).into());
        }

        repo.set_payment_status(order.id, PaymentStatus::Paid, Some(param.payment_id))
            .await?;

        let order_id = order.id;
        match self.finalize(user, order).await {
            Err(AppError::BadRequest(reason)) => {
                match OrderService::new(self.db).cancel_unfulfilled(order_id).await? {
                    Some(order) => {
                        tracing::warn!(
                            "Paid order {} cancelled and refunded: {}",
                            order.order_number,
                            reason
                        );
                        Err(AppError::bad_request(format!(
                            "{}; the order was cancelled and the payment refunded to your wallet",
                            reason
                        )))
                    }
                    None => Err(AppError::BadRequest(reason)),
                }
            }
            result => result,
        }
    }

    /// Confirms a pending order.
    ///
    /// Stock is taken with guarded decrements; if any line runs out, the lines already taken
    /// are put back and the order is left pending for the caller. The rest follows confirmation:
    /// offer usage, commissions, cart and abandoned-cart cleanup, notification and email.
    async fn finalize(&self, user: &User, order: Order) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);
        let product_repo = ProductRepository::new(self.db);

        let mut taken = Vec::with_capacity(order.items.len());
        for item in &order.items {
            if product_repo
                .decrement_stock(item.product_id, item.quantity)
                .await?
            {
                taken.push(item);
                continue;
            }
            for item in &taken {
                product_repo
                    .increment_stock(item.product_id, item.quantity)
                    .await?;
            }
            return Err(AppError::bad_request(format!("{} is out of stock", item.name)));
        }

        if !repo
            .transition(order.id, OrderStatus::Pending, OrderStatus::Confirmed, None)
            .await?
        {
            for item in &taken {
                product_repo
                    .increment_stock(item.product_id, item.quantity)
                    .await?;
            }
            return Err(AppError::bad_request("Order is no longer pending"));
        }

        if let Some(offer_id) = order.offer_id {
            OfferService::new(self.db).record_use(offer_id).await?;
        }
        CommissionService::new(self.db)
            .record_for_order(&order, self.config)
            .await?;
        CartItemRepository::new(self.db).clear(user.id).await?;
        if let Err(e) = AbandonedCartService::new(self.db)
            .mark_recovered(user.id)
            .await
        {
            tracing::warn!("Failed to mark abandoned cart of user {} recovered: {}", user.id, e);
        }
        tracing::info!("Order {} confirmed", order.order_number);

        NotificationService::new(self.db)
            .notify(CreateNotificationParam::new(
                user.id,
                NotificationKind::Order,
                "Order confirmed",
                format!("Your order {} has been confirmed", order.order_number),
            ))
            .await?;
        if let Err(e) = self
            .mailer
            .send(confirmation_email(user, &order, &self.config.currency))
            .await
        {
            tracing::warn!(
                "Failed to send confirmation email for order {}: {}",
                order.order_number,
                e
            );
        }

        match repo.find_by_id(order.id).await? {
            Some((order, items)) => Order::from_entity(order, items),
            None => Err(AppError::not_found("Order not found")),
        }
    }

    async fn non_empty_cart(&self, user_id: i32) -> Result<Cart, AppError> {
        let cart = CartService::new(self.db).get(user_id).await?;
        if cart.is_empty() {
            return Err(AppError::bad_request("Your cart is empty"));
        }

        Ok(cart)
    }

    async fn totals(
        &self,
        cart: &Cart,
        offer_code: Option<&str>,
    ) -> Result<CheckoutTotals, AppError> {
        let applied = OfferService::new(self.db)
            .resolve(offer_code, cart, self.config.shipping_fee)
            .await?;

        Ok(CheckoutTotals::compute(
            cart,
            applied,
            self.config.shipping_fee,
            self.config.free_shipping_threshold,
        ))
    }
}

fn confirmation_email(user: &User, order: &Order, currency: &str) -> EmailMessage {
    let mut body = format!(
        "Hi {},\n\nThanks for shopping with Threadline. Your order {} is confirmed.\n\n",
        user.name, order.order_number
    );
    for item in &order.items {
        body.push_str(&format!(
            "- {} x{} ({} {})\n",
            item.name,
            item.quantity,
            currency,
            item.line_total()
        ));
    }
    body.push_str(&format!(
        "\nSubtotal: {currency} {}\nDiscount: {currency} {}\n\
         Shipping: {currency} {}\nTotal: {currency} {}\n",
        order.subtotal, order.discount, order.shipping_fee, order.total
    ));

    EmailMessage {
        to: user.email.clone(),
        subject: format!("Order {} confirmed", order.order_number),
        body_text: body,
    }
}
