//! Seller factory for creating seller profiles together with their user account.

use crate::factory::{helpers::next_id, user::UserFactory};
use chrono::Utc;
use entity::{seller::SellerStatus, user::Role};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sellers.
///
/// Unless `user_id` is given, a fresh user with the `seller` role is created first.
pub struct SellerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    store_name: String,
    status: SellerStatus,
    commission_rate_bps: i32,
}

impl<'a> SellerFactory<'a> {
    /// Defaults: store `"Store {id}"`, status `pending`, 10% commission.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: None,
            store_name: format!("Store {}", id),
            status: SellerStatus::Pending,
            commission_rate_bps: 1000,
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = store_name.into();
        self
    }

    pub fn status(mut self, status: SellerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn commission_rate_bps(mut self, bps: i32) -> Self {
        self.commission_rate_bps = bps;
        self
    }

    pub async fn build(self) -> Result<entity::seller::Model, DbErr> {
        let user_id = match self.user_id {
            Some(id) => id,
            None => UserFactory::new(self.db).role(Role::Seller).build().await?.id,
        };
        let now = Utc::now();

        entity::seller::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            store_name: ActiveValue::Set(self.store_name),
            description: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            business_id: ActiveValue::Set(None),
            pickup_address: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            status_note: ActiveValue::Set(None),
            commission_rate_bps: ActiveValue::Set(self.commission_rate_bps),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending seller and its user.
pub async fn create_seller(db: &DatabaseConnection) -> Result<entity::seller::Model, DbErr> {
    SellerFactory::new(db).build().await
}

/// Creates an approved seller and its user.
pub async fn create_approved_seller(
    db: &DatabaseConnection,
) -> Result<entity::seller::Model, DbErr> {
    SellerFactory::new(db).status(SellerStatus::Approved).build().await
}
