//! Coupon offers and flash sales.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::{
    model::offer::{CreateFlashSaleDto, CreateOfferDto, FlashSaleDto, OfferDto, UpdateOfferDto},
    server::{
        error::AppError,
        model::{
            cart::PricedLine,
            product::{Product, MAX_PRICE},
            ParseEnum,
        },
    },
};

/// Flash sale discounts are limited to this range of whole percents.
pub const FLASH_SALE_PERCENT_RANGE: std::ops::RangeInclusive<i32> = 1..=90;

pub use entity::offer::OfferType;

/// What an offer takes off a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OfferBenefit {
    pub discount: i64,
    pub free_shipping: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: i32,
    pub code: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub offer_type: OfferType,
    pub value: i64,
    pub min_order_value: i64,
    pub max_discount: Option<i64>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub usage_limit: Option<i32>,
    pub used_count: i32,
    pub is_automatic: bool,
    pub is_active: bool,
}

impl Offer {
    pub fn from_entity(entity: entity::offer::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            title: entity.title,
            description: entity.description,
            offer_type: entity.offer_type,
            value: entity.value,
            min_order_value: entity.min_order_value,
            max_discount: entity.max_discount,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            usage_limit: entity.usage_limit,
            used_count: entity.used_count,
            is_automatic: entity.is_automatic,
            is_active: entity.is_active,
        }
    }

    pub fn is_running(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.starts_at <= now && now <= self.ends_at && !self.is_exhausted()
    }

    pub fn is_exhausted(&self) -> bool {
        self.usage_limit.is_some_and(|limit| self.used_count >= limit)
    }

    /// Checks window, usage and minimum order value, returning the reason it can't be used.
    pub fn check_applicable(&self, now: DateTime<Utc>, subtotal: i64) -> Result<(), AppError> {
        if now < self.starts_at {
            return Err(AppError::bad_request("This offer has not started yet"));
        }
        if now > self.ends_at {
            return Err(AppError::bad_request("This offer has expired"));
        }
        if self.is_exhausted() {
            return Err(AppError::bad_request("This offer has reached its usage limit"));
        }
        if subtotal < self.min_order_value {
            return Err(AppError::bad_request(format!(
                "Minimum order value for this offer is {}",
                self.min_order_value
            )));
        }
        Ok(())
    }

    /// Discount and shipping waiver for a cart. The discount never exceeds the subtotal.
    pub fn benefit(&self, lines: &[PricedLine], subtotal: i64) -> OfferBenefit {
        let (discount, free_shipping) = match self.offer_type {
            OfferType::Percentage => {
                let raw = subtotal * self.value / 100;
                let capped = match self.max_discount {
                    Some(cap) => raw.min(cap),
                    None => raw,
                };
                (capped, false)
            }
            OfferType::Fixed => (self.value.min(subtotal), false),
            OfferType::Bogo => {
                let free_units = lines
                    .iter()
                    .map(|line| i64::from(line.quantity / 2) * line.unit_price)
                    .sum();
                (free_units, false)
            }
            OfferType::FreeShipping => (0, true),
        };

        OfferBenefit {
            discount: discount.clamp(0, subtotal.max(0)),
            free_shipping,
        }
    }

    pub fn into_dto(self) -> OfferDto {
        OfferDto {
            id: self.id,
            code: self.code,
            title: self.title,
            description: self.description,
            offer_type: self.offer_type.to_value(),
            value: self.value,
            min_order_value: self.min_order_value,
            max_discount: self.max_discount,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            usage_limit: self.usage_limit,
            used_count: self.used_count,
            is_automatic: self.is_automatic,
            is_active: self.is_active,
        }
    }
}

/// Uppercased, trimmed offer code; empty codes become `None`.
pub fn normalize_code(code: Option<&str>) -> Option<String> {
    code.map(|c| c.trim().to_uppercase()).filter(|c| !c.is_empty())
}

#[derive(Debug, Clone)]
pub struct CreateOfferParam {
    pub code: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub offer_type: OfferType,
    pub value: i64,
    pub min_order_value: i64,
    pub max_discount: Option<i64>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub usage_limit: Option<i32>,
    pub is_automatic: bool,
    pub is_active: bool,
}

impl CreateOfferParam {
    pub fn from_dto(dto: CreateOfferDto) -> Result<Self, AppError> {
        let offer_type = OfferType::parse(&dto.offer_type).ok_or_else(|| {
            AppError::bad_request("Offer type must be percentage, fixed, bogo or free_shipping")
        })?;
        let code = normalize_code(dto.code.as_deref());
        if code.is_none() && !dto.is_automatic {
            return Err(AppError::bad_request("A code is required unless the offer is automatic"));
        }
        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request("Offer title is required"));
        }
        validate_offer_terms(
            offer_type,
            dto.value,
            dto.min_order_value,
            dto.max_discount,
            dto.starts_at,
            dto.ends_at,
            dto.usage_limit,
        )?;

        Ok(Self {
            code,
            title,
            description: dto.description,
            offer_type,
            value: dto.value,
            min_order_value: dto.min_order_value,
            max_discount: dto.max_discount,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            usage_limit: dto.usage_limit,
            is_automatic: dto.is_automatic,
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateOfferParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub value: Option<i64>,
    pub min_order_value: Option<i64>,
    pub max_discount: Option<i64>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub usage_limit: Option<i32>,
    pub is_automatic: Option<bool>,
    pub is_active: Option<bool>,
}

impl UpdateOfferParam {
    pub fn from_dto(dto: UpdateOfferDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description,
            value: dto.value,
            min_order_value: dto.min_order_value,
            max_discount: dto.max_discount,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            usage_limit: dto.usage_limit,
            is_automatic: dto.is_automatic,
            is_active: dto.is_active,
        }
    }

    pub fn validate_against(&self, current: &Offer) -> Result<(), AppError> {
        if self.title.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::bad_request("Offer title is required"));
        }
        validate_offer_terms(
            current.offer_type,
            self.value.unwrap_or(current.value),
            self.min_order_value.unwrap_or(current.min_order_value),
            self.max_discount.or(current.max_discount),
            self.starts_at.unwrap_or(current.starts_at),
            self.ends_at.unwrap_or(current.ends_at),
            self.usage_limit.or(current.usage_limit),
        )
    }
}

fn validate_offer_terms(
    offer_type: OfferType,
    value: i64,
    min_order_value: i64,
    max_discount: Option<i64>,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    usage_limit: Option<i32>,
) -> Result<(), AppError> {
    match offer_type {
        OfferType::Percentage if !(1..=100).contains(&value) => {
            return Err(AppError::bad_request("Percentage must be between 1 and 100"));
        }
        OfferType::Fixed if value <= 0 => {
            return Err(AppError::bad_request("Fixed discount must be greater than zero"));
        }
        _ => {}
    }
    if value > MAX_PRICE
        || min_order_value > MAX_PRICE
        || max_discount.is_some_and(|m| m > MAX_PRICE)
    {
        return Err(AppError::bad_request(format!(
            "Offer amounts cannot exceed {}",
            MAX_PRICE
        )));
    }
    if min_order_value < 0 || max_discount.is_some_and(|m| m <= 0) {
        return Err(AppError::bad_request(
            "Minimum order value and maximum discount cannot be negative",
        ));
    }
    if ends_at <= starts_at {
        return Err(AppError::bad_request("Offer must end after it starts"));
    }
    if usage_limit.is_some_and(|l| l <= 0) {
        return Err(AppError::bad_request("Usage limit must be positive"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlashSale {
    pub id: i32,
    pub title: String,
    pub discount_percent: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
    pub product_ids: Vec<i32>,
}

impl FlashSale {
    pub fn from_entity(entity: entity::flash_sale::Model, product_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            discount_percent: entity.discount_percent,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            is_active: entity.is_active,
            product_ids,
        }
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.starts_at <= now && now <= self.ends_at
    }

    pub fn into_dto(self) -> FlashSaleDto {
        FlashSaleDto {
            id: self.id,
            title: self.title,
            discount_percent: self.discount_percent,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            is_active: self.is_active,
            product_ids: self.product_ids,
        }
    }
}

/// `price` reduced by `percent`, rounded down to a whole minor unit.
pub fn apply_percent_off(price: i64, percent: i32) -> i64 {
    price - price * i64::from(percent) / 100
}

/// Live flash sale discounts keyed by product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBook {
    percents: HashMap<i32, i32>,
}

impl PriceBook {
    pub fn new(percents: HashMap<i32, i32>) -> Self {
        Self { percents }
    }

    pub fn percent_for(&self, product_id: i32) -> Option<i32> {
        self.percents.get(&product_id).copied()
    }

    /// Price a customer pays right now: list price minus the best live flash sale.
    pub fn effective_price(&self, product: &Product) -> i64 {
        match self.percent_for(product.id) {
            Some(percent) => apply_percent_off(product.price, percent),
            None => product.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFlashSaleParam {
    pub title: String,
    pub discount_percent: i32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub product_ids: Vec<i32>,
}

impl CreateFlashSaleParam {
    pub fn from_dto(dto: CreateFlashSaleDto) -> Result<Self, AppError> {
        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request("Flash sale title is required"));
        }
        if !FLASH_SALE_PERCENT_RANGE.contains(&dto.discount_percent) {
            return Err(AppError::bad_request("Flash sale discount must be between 1 and 90"));
        }
        if dto.ends_at <= dto.starts_at {
            return Err(AppError::bad_request("Flash sale must end after it starts"));
        }
        let mut product_ids = dto.product_ids;
        product_ids.sort_unstable();
        product_ids.dedup();
        if product_ids.is_empty() {
            return Err(AppError::bad_request("A flash sale needs at least one product"));
        }

        Ok(Self {
            title,
            discount_percent: dto.discount_percent,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            product_ids,
        })
    }
}
