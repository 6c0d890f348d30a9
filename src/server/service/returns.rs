use chrono::{Duration, Utc};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{order::OrderRepository, product::ProductRepository, return_request::ReturnRepository},
    error::AppError,
    model::{
        notification::{CreateNotificationParam, NotificationKind},
        order::{Order, OrderItem, OrderStatus},
        return_request::{CreateReturnParam, ReturnFilter, ReturnRequest, ReturnStatus},
        seller::OwnerScope,
    },
    service::{
        commission::CommissionService, notification::NotificationService, wallet::WalletService,
    },
};

pub struct ReturnService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReturnService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a return for units of a delivered order item.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Item missing or ordered by someone else
    /// - `Err(AppError::BadRequest)` - Not delivered, outside the return window, blank reason,
    ///   or more units than are still returnable
    pub async fn create(
        &self,
        user_id: i32,
        order_item_id: i32,
        quantity: i32,
        reason: String,
        window_days: i64,
    ) -> Result<ReturnRequest, AppError> {
        let repo = ReturnRepository::new(self.db);

        let reason = reason.trim().to_string();
        if reason.is_empty() {
            return Err(AppError::bad_request("Return reason is required"));
        }
        if quantity < 1 {
            return Err(AppError::bad_request("Quantity must be at least 1"));
        }

        let (item, order) = self.find_item(order_item_id).await?;
        if order.user_id != user_id {
            return Err(AppError::not_found("Order item not found"));
        }
        if order.status != OrderStatus::Delivered {
            return Err(AppError::bad_request("Only delivered orders can be returned"));
        }
        let delivered_at = order.delivered_at.unwrap_or(order.updated_at);
        if Utc::now() > delivered_at + Duration::days(window_days) {
            return Err(AppError::bad_request(format!(
                "Returns are only accepted within {} days of delivery",
                window_days
            )));
        }

        let claimed = repo.claimed_units(item.id).await?;
        let returnable = item.quantity - claimed;
        if quantity > returnable {
            return Err(AppError::bad_request(format!(
                "Only {} unit(s) of this item can still be returned",
                returnable.max(0)
            )));
        }

        let request = ReturnRequest::from_entity(
            repo.create(CreateReturnParam {
                order_id: order.id,
                order_item_id: item.id,
                user_id,
                seller_id: item.seller_id,
                quantity,
                reason,
            })
            .await?,
        );
        tracing::info!(
            "Return {} requested for {} unit(s) of order item {}",
            request.id,
            quantity,
            item.id
        );

        self.notify(
            &request,
            format!(
                "We received your return request for {} on order {}",
                item.name, order.order_number
            ),
        )
        .await?;

        Ok(request)
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<ReturnRequest>, AppError> {
        self.list(ReturnFilter {
            user_id: Some(user_id),
            ..Default::default()
        })
        .await
    }

    pub async fn list(&self, filter: ReturnFilter) -> Result<Vec<ReturnRequest>, AppError> {
        let repo = ReturnRepository::new(self.db);

        let returns = repo.list(filter).await?;

        Ok(returns.into_iter().map(ReturnRequest::from_entity).collect())
    }

    pub async fn approve(&self, scope: OwnerScope, id: i32) -> Result<ReturnRequest, AppError> {
        let request = self
            .transition(scope, id, ReturnStatus::Requested, ReturnStatus::Approved, None, None)
            .await?;
        self.notify(&request, "Your return was approved; a pickup will be scheduled".to_string())
            .await?;

        Ok(request)
    }

    pub async fn reject(
        &self,
        scope: OwnerScope,
        id: i32,
        note: Option<String>,
    ) -> Result<ReturnRequest, AppError> {
        let note = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());

        let request = self
            .transition(
                scope,
                id,
                ReturnStatus::Requested,
                ReturnStatus::Rejected,
                note.clone(),
                None,
            )
            .await?;
        let message = match note {
            Some(note) => format!("Your return was rejected: {}", note),
            None => "Your return was rejected".to_string(),
        };
        self.notify(&request, message).await?;

        Ok(request)
    }

    pub async fn mark_picked_up(&self, id: i32) -> Result<ReturnRequest, AppError> {
        let request = self
            .transition(
                OwnerScope::Any,
                id,
                ReturnStatus::Approved,
                ReturnStatus::PickedUp,
                None,
                None,
            )
            .await?;
        self.notify(&request, "We picked up your return".to_string())
            .await?;

        Ok(request)
    }

    /// Refunds a picked-up return to the customer's wallet.
    ///
    /// The status change is guarded, so only one of two concurrent refunds gets past it and
    /// credits the wallet, restocks the product and adjusts the seller's commission.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Return is not picked up, or was already refunded
    pub async fn refund(&self, id: i32) -> Result<ReturnRequest, AppError> {
        let current = self.find(OwnerScope::Any, id).await?;
        let (item, order) = self.find_item(current.order_item_id).await?;
        let amount = item.price * i64::from(current.quantity);

        let request = self
            .transition(
                OwnerScope::Any,
                id,
                ReturnStatus::PickedUp,
                ReturnStatus::Refunded,
                None,
                Some(amount),
            )
            .await?;

        WalletService::new(self.db)
            .credit(
                request.user_id,
                amount,
                format!("Refund for {} on order {}", item.name, order.order_number),
                Some(format!("return:{}", request.id)),
            )
            .await?;
        ProductRepository::new(self.db)
            .increment_stock(item.product_id, request.quantity)
            .await?;
        CommissionService::new(self.db)
            .adjust_for_refund(item.id, request.quantity)
            .await?;
        tracing::info!("Return {} refunded {} to user {}", request.id, amount, request.user_id);

        self.notify(
            &request,
            format!("Your refund of {} was credited to your wallet", amount),
        )
        .await?;

        Ok(request)
    }

    async fn transition(
        &self,
        scope: OwnerScope,
        id: i32,
        from: ReturnStatus,
        to: ReturnStatus,
        note: Option<String>,
        refund_amount: Option<i64>,
    ) -> Result<ReturnRequest, AppError> {
        let repo = ReturnRepository::new(self.db);

        let request = self.find(scope, id).await?;
        if request.status != from {
            return Err(AppError::bad_request(format!(
                "Return is {}; only {} returns can be marked {}",
                request.status.to_value(),
                from.to_value(),
                to.to_value()
            )));
        }
        if !repo.transition(id, from, to, note, refund_amount).await? {
            return Err(AppError::bad_request(
                "Return status changed in the meantime; reload and try again",
            ));
        }

        self.find(scope, id).await
    }

    /// Finds a return visible to `scope`; returns of other sellers look missing.
    async fn find(&self, scope: OwnerScope, id: i32) -> Result<ReturnRequest, AppError> {
        let repo = ReturnRepository::new(self.db);

        match repo.find_by_id(id).await? {
            Some(request) if scope.allows(request.seller_id) => {
                Ok(ReturnRequest::from_entity(request))
            }
            _ => Err(AppError::not_found("Return not found")),
        }
    }

    async fn find_item(&self, order_item_id: i32) -> Result<(OrderItem, Order), AppError> {
        match OrderRepository::new(self.db).find_item(order_item_id).await? {
            Some((item, order)) => Ok((
                OrderItem::from_entity(item),
                Order::from_entity(order, Vec::new())?,
            )),
            None => Err(AppError::not_found("Order item not found")),
        }
    }

    async fn notify(&self, request: &ReturnRequest, message: String) -> Result<(), AppError> {
        NotificationService::new(self.db)
            .notify(CreateNotificationParam::new(
                request.user_id,
                NotificationKind::Return,
                "Return update",
                message,
            ))
            .await?;

        Ok(())
    }
}
