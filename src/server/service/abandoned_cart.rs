use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{abandoned_cart::AbandonedCartRepository, user::UserRepository},
    error::AppError,
    integration::mail::{EmailMessage, Mailer},
    model::{
        abandoned_cart::{snapshot, AbandonedCart, AbandonedCartStatus},
        cart::Cart,
    },
    service::cart::CartService,
};

pub struct AbandonedCartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AbandonedCartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Snapshots the user's current cart.
    pub async fn track(&self, user_id: i32) -> Result<(), AppError> {
        let cart = CartService::new(self.db).get(user_id).await?;

        self.track_cart(user_id, &cart).await
    }

    /// Stores `cart` as the user's snapshot; an empty cart removes the record.
    pub async fn track_cart(&self, user_id: i32, cart: &Cart) -> Result<(), AppError> {
        let repo = AbandonedCartRepository::new(self.db);

        if cart.is_empty() {
            repo.delete_by_user(user_id).await?;
        } else {
            repo.upsert(user_id, &snapshot(cart), cart.subtotal()).await?;
        }

        Ok(())
    }

    /// Like `track_cart`, but only logs failures.
    pub async fn track_quietly(&self, user_id: i32, cart: &Cart) {
        if let Err(e) = self.track_cart(user_id, cart).await {
            tracing::warn!("Failed to track abandoned cart for user {}: {}", user_id, e);
        }
    }

    /// Returns the snapshot to show in the storefront popup, if there is one.
    pub async fn popup(
        &self,
        user_id: i32,
        idle: Duration,
    ) -> Result<Option<AbandonedCart>, AppError> {
        let repo = AbandonedCartRepository::new(self.db);

        let Some(record) = repo.find_by_user(user_id).await? else {
            return Ok(None);
        };
        let cart = AbandonedCart::from_entity(record)?;

        let show = cart.status == AbandonedCartStatus::Active
            && !cart.items.is_empty()
            && cart.is_idle(Utc::now(), idle);

        Ok(show.then_some(cart))
    }

    pub async fn dismiss(&self, user_id: i32) -> Result<(), AppError> {
        let repo = AbandonedCartRepository::new(self.db);

        repo.set_status(user_id, AbandonedCartStatus::Dismissed).await?;

        Ok(())
    }

    pub async fn mark_recovered(&self, user_id: i32) -> Result<(), AppError> {
        let repo = AbandonedCartRepository::new(self.db);

        repo.set_status(user_id, AbandonedCartStatus::Recovered).await?;

        Ok(())
    }

    /// Emails a recovery reminder for every cart that is due and returns how many were sent.
    ///
    /// A failed send is logged and the cart stays due for the next run.
    pub async fn send_reminders(
        &self,
        mailer: &dyn Mailer,
        config: &Config,
    ) -> Result<u32, AppError> {
        let repo = AbandonedCartRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let now = Utc::now();
        let idle = Duration::minutes(config.abandoned_cart_idle_minutes);

        let mut sent = 0;
        for record in repo.list_idle(now - idle).await? {
            let cart = AbandonedCart::from_entity(record)?;
            if !cart.is_due_for_reminder(now, idle, config.abandoned_cart_max_reminders) {
                continue;
            }
            let Some(user) = user_repo.find_by_id(cart.user_id).await? else {
                continue;
            };

            let message = reminder_email(&user.email, &user.name, &cart, config);
            match mailer.send(message).await {
                Ok(()) => {
                    repo.record_reminder(cart.id, now).await?;
                    sent += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to send abandoned cart reminder to user {}: {}",
                        cart.user_id,
                        e
                    );
                }
            }
        }

        Ok(sent)
    }
}

fn reminder_email(to: &str, name: &str, cart: &AbandonedCart, config: &Config) -> EmailMessage {
    let mut body = format!("Hi {},\n\nYou left these in your Threadline cart:\n\n", name);
    for item in &cart.items {
        body.push_str(&format!(
            "- {} x{} ({} {})\n",
            item.name, item.quantity, config.currency, item.unit_price
        ));
    }
    body.push_str(&format!(
        "\nTotal: {} {}\n\nPick up where you left off: {}/cart\n",
        config.currency,
        cart.total,
        config.app_url.trim_end_matches('/')
    ));

    EmailMessage {
        to: to.to_string(),
        subject: "Your cart is waiting".to_string(),
        body_text: body,
    }
}
