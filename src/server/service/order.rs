use chrono::Utc;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{order::OrderRepository, product::ProductRepository},
    error::AppError,
    model::{
        notification::{CreateNotificationParam, NotificationKind},
        order::{Order, OrderPage, OrderStatus, PaymentMethod, PaymentStatus},
    },
    service::{
        commission::CommissionService, notification::NotificationService, wallet::WalletService,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the customer's orders, newest first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<OrderPage, AppError> {
        let repo = OrderRepository::new(self.db);

        let (orders, total) = repo.list_by_user(user_id, page, per_page).await?;
        let orders = orders
            .into_iter()
            .map(|(order, items)| Order::from_entity(order, items))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderPage {
            orders,
            total,
            page,
            per_page,
        })
    }

    /// Gets an order owned by the customer.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Order missing or placed by someone else
    pub async fn get_for_user(&self, user_id: i32, id: i32) -> Result<Order, AppError> {
        let order = self.find(id).await?;
        if order.user_id != user_id {
            return Err(AppError::not_found("Order not found"));
        }

        Ok(order)
    }

    /// Gets one page of every order, optionally only those in `status`.
    pub async fn list_all(
        &self,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<OrderPage, AppError> {
        let repo = OrderRepository::new(self.db);

        let (orders, total) = repo.list_all(status, page, per_page).await?;
        let orders = orders
            .into_iter()
            .map(|(order, items)| Order::from_entity(order, items))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderPage {
            orders,
            total,
            page,
            per_page,
        })
    }

    /// Orders holding the seller's items; other sellers' items are left out.
    pub async fn list_for_seller(&self, seller_id: i32) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        let orders = repo.list_for_seller(seller_id).await?;

        orders
            .into_iter()
            .map(|(order, items)| Order::from_entity(order, items))
            .collect()
    }

    /// Cancels the customer's own order.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Not the customer's order
    /// - `Err(AppError::BadRequest)` - Already shipped, delivered or cancelled
    pub async fn cancel_for_user(&self, user_id: i32, id: i32) -> Result<Order, AppError> {
        let order = self.get_for_user(user_id, id).await?;

        self.cancel(order).await
    }

    /// Cancels an order that was paid for but could not be confirmed, refunding the payment
    /// to the customer's wallet.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The cancelled order
    /// - `Ok(None)` - The order had already left the pending state and was left alone
    pub async fn cancel_unfulfilled(&self, id: i32) -> Result<Option<Order>, AppError> {
        let order = self.find(id).await?;
        if order.status != OrderStatus::Pending {
            return Ok(None);
        }

        self.cancel(order).await.map(Some)
    }

    /// Moves an order along its fulfilment steps.
    ///
    /// Delivery stamps `delivered_at`, collects cash-on-delivery payments and makes the order's
    /// commissions eligible for settlement. Cancelling goes through the same path as a customer
    /// cancel.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown order
    /// - `Err(AppError::BadRequest)` - Transition not allowed from the current status
    pub async fn update_status(&self, id: i32, next: OrderStatus) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        let order = self.find(id).await?;
        if !order.status.can_transition_to(next) {
            return Err(AppError::bad_request(format!(
                "Cannot move an order from {} to {}",
                order.status.to_value(),
                next.to_value()
            )));
        }
        if next == OrderStatus::Cancelled {
            return self.cancel(order).await;
        }

        let delivered_at = (next == OrderStatus::Delivered).then(Utc::now);
        if !repo.transition(order.id, order.status, next, delivered_at).await? {
            return Err(AppError::bad_request(
                "Order status changed in the meantime; reload and try again",
            ));
        }
        if next == OrderStatus::Delivered {
            if order.payment_method == PaymentMethod::Cod {
                repo.set_payment_status(order.id, PaymentStatus::Paid, None)
                    .await?;
            }
            CommissionService::new(self.db).mark_eligible(order.id).await?;
        }
        tracing::info!(
            "Order {} moved from {} to {}",
            order.order_number,
            order.status.to_value(),
            next.to_value()
        );

        self.notify(
            &order,
            format!("Your order {} is now {}", order.order_number, next.to_value()),
        )
        .await?;

        self.find(id).await
    }

    /// Cancels an order, undoing whatever its confirmation did.
    ///
    /// Stock comes back only for orders that were confirmed, unsettled commissions are reversed
    /// and a captured online payment is refunded to the customer's wallet.
    async fn cancel(&self, order: Order) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        if !order.status.is_cancellable() {
            return Err(AppError::bad_request(format!(
                "Orders that are {} cannot be cancelled",
                order.status.to_value()
            )));
        }
        if !repo
            .transition(order.id, order.status, OrderStatus::Cancelled, None)
            .await?
        {
            return Err(AppError::bad_request(
                "Order status changed in the meantime; reload and try again",
            ));
        }

        if order.status.is_finalized() {
            let product_repo = ProductRepository::new(self.db);
            for item in &order.items {
                product_repo
                    .increment_stock(item.product_id, item.quantity)
                    .await?;
            }
        }
        CommissionService::new(self.db)
            .reverse_for_order(order.id)
            .await?;

        let refunded = order.payment_method == PaymentMethod::Online
            && order.payment_status == PaymentStatus::Paid;
        if refunded {
            WalletService::new(self.db)
                .credit(
                    order.user_id,
                    order.total,
                    format!("Refund for order {}", order.order_number),
                    Some(format!("order:{}", order.id)),
                )
                .await?;
            repo.set_payment_status(order.id, PaymentStatus::Refunded, None)
                .await?;
        }
        tracing::info!("Order {} cancelled (refunded: {})", order.order_number, refunded);

        let message = if refunded {
            format!(
                "Your order {} was cancelled and {} was refunded to your wallet",
                order.order_number, order.total
            )
        } else {
            format!("Your order {} was cancelled", order.order_number)
        };
        self.notify(&order, message).await?;

        self.find(order.id).await
    }

    async fn find(&self, id: i32) -> Result<Order, AppError> {
        match OrderRepository::new(self.db).find_by_id(id).await? {
            Some((order, items)) => Order::from_entity(order, items),
            None => Err(AppError::not_found("Order not found")),
        }
    }

    async fn notify(&self, order: &Order, message: String) -> Result<(), AppError> {
        NotificationService::new(self.db)
            .notify(CreateNotificationParam::new(
                order.user_id,
                NotificationKind::Order,
                "Order update",
                message,
            ))
            .await?;

        Ok(())
    }
}
