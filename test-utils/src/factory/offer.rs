//! Offer factory for coupons and automatic promotions.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::offer::OfferType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test offers.
///
/// Defaults to an active 10% coupon with code `SAVE{id}`, valid from an hour ago for a week.
pub struct OfferFactory<'a> {
    db: &'a DatabaseConnection,
    code: Option<String>,
    offer_type: OfferType,
    value: i64,
    min_order_value: i64,
    max_discount: Option<i64>,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    usage_limit: Option<i32>,
    used_count: i32,
    is_automatic: bool,
    is_active: bool,
}

impl<'a> OfferFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            code: Some(format!("SAVE{}", id)),
            offer_type: OfferType::Percentage,
            value: 10,
            min_order_value: 0,
            max_discount: None,
            starts_at: now - Duration::hours(1),
            ends_at: now + Duration::days(7),
            usage_limit: None,
            used_count: 0,
            is_automatic: false,
            is_active: true,
        }
    }

    pub fn code(mut self, code: Option<&str>) -> Self {
        self.code = code.map(str::to_string);
        self
    }

    /// Sets the type and value together, e.g. `(OfferType::Fixed, 20_000)`.
    pub fn kind(mut self, offer_type: OfferType, value: i64) -> Self {
        self.offer_type = offer_type;
        self.value = value;
        self
    }

    pub fn min_order_value(mut self, min_order_value: i64) -> Self {
        self.min_order_value = min_order_value;
        self
    }

    pub fn max_discount(mut self, max_discount: Option<i64>) -> Self {
        self.max_discount = max_discount;
        self
    }

    pub fn window(mut self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    pub fn usage(mut self, usage_limit: Option<i32>, used_count: i32) -> Self {
        self.usage_limit = usage_limit;
        self.used_count = used_count;
        self
    }

    pub fn automatic(mut self, is_automatic: bool) -> Self {
        self.is_automatic = is_automatic;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::offer::Model, DbErr> {
        entity::offer::ActiveModel {
            code: ActiveValue::Set(self.code),
            title: ActiveValue::Set(format!("Offer {}", next_id())),
            description: ActiveValue::Set(None),
            offer_type: ActiveValue::Set(self.offer_type),
            value: ActiveValue::Set(self.value),
            min_order_value: ActiveValue::Set(self.min_order_value),
            max_discount: ActiveValue::Set(self.max_discount),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            usage_limit: ActiveValue::Set(self.usage_limit),
            used_count: ActiveValue::Set(self.used_count),
            is_automatic: ActiveValue::Set(self.is_automatic),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 10% coupon.
pub async fn create_offer(db: &DatabaseConnection) -> Result<entity::offer::Model, DbErr> {
    OfferFactory::new(db).build().await
}
