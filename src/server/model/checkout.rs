//! Checkout totals and placed orders.

use crate::{
    model::{
        checkout::{
            CheckoutSummaryDto, CreatePaymentOrderDto, CreatePaymentOrderResponseDto,
            GatewayOrderDto, VerifyPaymentDto,
        },
        offer::OfferValidationDto,
    },
    server::{
        error::AppError,
        integration::payment::GatewayOrder,
        model::{
            cart::Cart,
            offer::{normalize_code, Offer, OfferBenefit},
            order::{Order, PaymentMethod, ShippingAddress},
            ParseEnum,
        },
    },
};

/// An offer that passed validation for a cart, with what it takes off.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedOffer {
    pub offer: Offer,
    pub benefit: OfferBenefit,
}

impl AppliedOffer {
    /// Value used to compare offers; a shipping waiver is worth the fee it saves.
    pub fn value(&self, shipping_fee: i64) -> i64 {
        if self.benefit.free_shipping {
            self.benefit.discount + shipping_fee
        } else {
            self.benefit.discount
        }
    }

    /// The code shoppers typed, or the title for automatic offers.
    pub fn label(&self) -> String {
        self.offer
            .code
            .clone()
            .unwrap_or_else(|| self.offer.title.clone())
    }

    pub fn into_validation_dto(self, subtotal: i64) -> OfferValidationDto {
        OfferValidationDto {
            subtotal,
            discount: self.benefit.discount.clamp(0, subtotal),
            free_shipping: self.benefit.free_shipping,
            offer: self.offer.into_dto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutTotals {
    pub subtotal: i64,
    pub discount: i64,
    pub shipping_fee: i64,
    pub total: i64,
    pub item_count: i32,
    pub applied_offer: Option<AppliedOffer>,
}

impl CheckoutTotals {
    /// Shipping is charged unless the discounted subtotal reaches `free_shipping_threshold` or
    /// the offer waives it.
    pub fn compute(
        cart: &Cart,
        applied_offer: Option<AppliedOffer>,
        shipping_fee: i64,
        free_shipping_threshold: i64,
    ) -> Self {
        let subtotal = cart.subtotal();
        let benefit = applied_offer
            .as_ref()
            .map(|applied| applied.benefit)
            .unwrap_or_default();
        let discount = benefit.discount.clamp(0, subtotal);
        let discounted = subtotal - discount;
        let shipping_fee = if benefit.free_shipping || discounted >= free_shipping_threshold {
            0
        } else {
            shipping_fee
        };

        Self {
            subtotal,
            discount,
            shipping_fee,
            total: discounted + shipping_fee,
            item_count: cart.item_count(),
            applied_offer,
        }
    }

    pub fn offer_id(&self) -> Option<i32> {
        self.applied_offer.as_ref().map(|applied| applied.offer.id)
    }

    pub fn into_dto(self, currency: &str) -> CheckoutSummaryDto {
        CheckoutSummaryDto {
            subtotal: self.subtotal,
            discount: self.discount,
            shipping_fee: self.shipping_fee,
            total: self.total,
            item_count: self.item_count,
            applied_offer: self.applied_offer.as_ref().map(AppliedOffer::label),
            currency: currency.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaceOrderParam {
    pub offer_code: Option<String>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

impl PlaceOrderParam {
    pub fn from_dto(dto: CreatePaymentOrderDto) -> Result<Self, AppError> {
        let payment_method = PaymentMethod::parse(&dto.payment_method)
            .ok_or_else(|| AppError::bad_request("Payment method must be online or cod"))?;

        Ok(Self {
            offer_code: normalize_code(dto.offer_code.as_deref()),
            shipping_address: ShippingAddress::from_dto(dto.shipping_address)?,
            payment_method,
        })
    }
}

/// What the storefront widget returned after payment.
#[derive(Debug, Clone)]
pub struct VerifyPaymentParam {
    pub order_id: i32,
    pub gateway_order_id: String,
    pub payment_id: String,
    pub signature: String,
}

impl From<VerifyPaymentDto> for VerifyPaymentParam {
    fn from(dto: VerifyPaymentDto) -> Self {
        Self {
            order_id: dto.order_id,
            gateway_order_id: dto.gateway_order_id.trim().to_string(),
            payment_id: dto.payment_id.trim().to_string(),
            signature: dto.signature.trim().to_string(),
        }
    }
}

/// Gateway order plus the public key the widget needs to open it.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayCheckout {
    pub order: GatewayOrder,
    pub key_id: String,
}

#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub gateway: Option<GatewayCheckout>,
}

impl PlacedOrder {
    pub fn into_dto(self) -> CreatePaymentOrderResponseDto {
        CreatePaymentOrderResponseDto {
            order: self.order.into_dto(),
            gateway: self.gateway.map(|gateway| GatewayOrderDto {
                gateway_order_id: gateway.order.id,
                amount: gateway.order.amount,
                currency: gateway.order.currency,
                key_id: gateway.key_id,
            }),
        }
    }
}
