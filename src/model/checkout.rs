use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::order::OrderDto;

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CheckoutSummaryRequestDto {
    #[serde(default)]
    pub offer_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CheckoutSummaryDto {
    pub subtotal: i64,
    pub discount: i64,
    pub shipping_fee: i64,
    pub total: i64,
    pub item_count: i32,
    /// Code or title of the applied offer, if any.
    pub applied_offer: Option<String>,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ShippingAddressDto {
    pub name: String,
    pub phone: String,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    /// Six-digit postal code.
    pub pincode: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreatePaymentOrderDto {
    #[serde(default)]
    pub offer_code: Option<String>,
    pub shipping_address: ShippingAddressDto,
    /// `online` (default) or `cod`.
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_payment_method() -> String {
    "online".to_string()
}

/// Details the storefront needs to open the hosted payment widget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GatewayOrderDto {
    pub gateway_order_id: String,
    pub amount: i64,
    pub currency: String,
    pub key_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreatePaymentOrderResponseDto {
    pub order: OrderDto,
    /// Absent for cash-on-delivery orders, which are confirmed immediately.
    pub gateway: Option<GatewayOrderDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct VerifyPaymentDto {
    pub order_id: i32,
    pub gateway_order_id: String,
    pub payment_id: String,
    pub signature: String,
}
