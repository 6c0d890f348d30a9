//! Marketplace seller profiles.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::{
    model::seller::{
        SellerAuthResponseDto, SellerDashboardDto, SellerDto, SellerRegisterDto,
        UpdateSellerProfileDto,
    },
    server::{
        error::AppError,
        model::{
            product::Product,
            user::{validate_credentials, User},
        },
    },
};

/// Highest commission rate an admin may set, in basis points (50%).
pub const MAX_COMMISSION_BPS: i32 = 5_000;
/// Active products at or below this stock show up on the dashboard.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

pub use entity::seller::SellerStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: i32,
    pub user_id: i32,
    pub store_name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub business_id: Option<String>,
    pub pickup_address: Option<String>,
    pub status: SellerStatus,
    pub status_note: Option<String>,
    pub commission_rate_bps: i32,
    pub created_at: DateTime<Utc>,
}

impl Seller {
    pub fn from_entity(entity: entity::seller::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            store_name: entity.store_name,
            description: entity.description,
            phone: entity.phone,
            business_id: entity.business_id,
            pickup_address: entity.pickup_address,
            status: entity.status,
            status_note: entity.status_note,
            commission_rate_bps: entity.commission_rate_bps,
            created_at: entity.created_at,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == SellerStatus::Approved
    }

    pub fn into_dto(self) -> SellerDto {
        SellerDto {
            id: self.id,
            user_id: self.user_id,
            store_name: self.store_name,
            description: self.description,
            phone: self.phone,
            business_id: self.business_id,
            pickup_address: self.pickup_address,
            status: self.status.to_value(),
            status_note: self.status_note,
            commission_rate_bps: self.commission_rate_bps,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSellerParam {
    pub user_id: i32,
    pub store_name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub business_id: Option<String>,
    pub pickup_address: Option<String>,
    pub commission_rate_bps: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSellerProfileParam {
    pub store_name: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub pickup_address: Option<String>,
}

impl UpdateSellerProfileParam {
    pub fn from_dto(dto: UpdateSellerProfileDto) -> Result<Self, AppError> {
        let store_name = match dto.store_name {
            Some(name) if name.trim().is_empty() => {
                return Err(AppError::bad_request("Store name cannot be empty"))
            }
            other => other.map(|n| n.trim().to_string()),
        };

        Ok(Self {
            store_name,
            description: dto.description,
            phone: dto.phone,
            pickup_address: dto.pickup_address,
        })
    }
}

/// Validated seller sign-up input: the user account plus the store profile.
#[derive(Debug, Clone)]
pub struct SellerRegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub store_name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub business_id: Option<String>,
    pub pickup_address: Option<String>,
}

impl SellerRegisterParam {
    pub fn from_dto(dto: SellerRegisterDto) -> Result<Self, AppError> {
        let (name, email) = validate_credentials(&dto.name, &dto.email, &dto.password)?;
        let store_name = dto.store_name.trim().to_string();
        if store_name.is_empty() {
            return Err(AppError::bad_request("Store name is required"));
        }

        Ok(Self {
            name,
            email,
            password: dto.password,
            store_name,
            description: dto.description,
            phone: dto.phone,
            business_id: dto.business_id,
            pickup_address: dto.pickup_address,
        })
    }
}

/// A signed-in seller account.
#[derive(Debug, Clone)]
pub struct SellerSession {
    pub token: String,
    pub user: User,
    pub seller: Seller,
}

impl SellerSession {
    pub fn into_dto(self) -> SellerAuthResponseDto {
        SellerAuthResponseDto {
            token: self.token,
            user: self.user.into_dto(),
            seller: self.seller.into_dto(),
        }
    }
}

/// Checks an admin-supplied commission rate.
pub fn validate_commission_rate(bps: i32) -> Result<i32, AppError> {
    if !(0..=MAX_COMMISSION_BPS).contains(&bps) {
        return Err(AppError::bad_request(format!(
            "Commission rate must be between 0 and {} basis points",
            MAX_COMMISSION_BPS
        )));
    }
    Ok(bps)
}

/// Which seller's records an actor may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerScope {
    /// Admins act on every record.
    Any,
    Seller(i32),
}

impl OwnerScope {
    pub fn allows(&self, seller_id: Option<i32>) -> bool {
        match self {
            Self::Any => true,
            Self::Seller(id) => seller_id == Some(*id),
        }
    }

    pub fn seller_id(&self) -> Option<i32> {
        match self {
            Self::Any => None,
            Self::Seller(id) => Some(*id),
        }
    }
}

/// Aggregates shown on the seller dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SellerEarnings {
    pub gross_sales: i64,
    pub pending_earnings: i64,
    pub settled_earnings: i64,
}

#[derive(Debug, Clone)]
pub struct SellerDashboard {
    pub product_count: u64,
    pub active_product_count: u64,
    pub order_count: u64,
    pub earnings: SellerEarnings,
    pub wallet_balance: i64,
    pub low_stock: Vec<Product>,
}

impl SellerDashboard {
    pub fn into_dto(self) -> SellerDashboardDto {
        SellerDashboardDto {
            product_count: self.product_count,
            active_product_count: self.active_product_count,
            order_count: self.order_count,
            gross_sales: self.earnings.gross_sales,
            pending_earnings: self.earnings.pending_earnings,
            settled_earnings: self.earnings.settled_earnings,
            wallet_balance: self.wallet_balance,
            low_stock: self
                .low_stock
                .into_iter()
                .map(|p| {
                    let price = p.price;
                    p.summary(price)
                })
                .collect(),
        }
    }
}
