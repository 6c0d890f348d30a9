//! Hosted payment gateway client.
//!
//! Orders are created through the gateway's REST API with HTTP basic auth. The checkout widget
//! returns `(order_id, payment_id, signature)`, where the signature is the hex HMAC-SHA256 of
//! `"{order_id}|{payment_id}"` keyed with the key secret.

use std::sync::Arc;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::server::{config::PaymentConfig, error::payment::PaymentError};

type HmacSha256 = Hmac<Sha256>;

/// Order created on the gateway side, referenced by the storefront widget.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
}

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Public key id handed to the storefront widget.
    fn key_id(&self) -> &str;

    /// Creates a gateway order for `amount` minor units.
    async fn create_order(
        &self,
        amount: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, PaymentError>;

    /// Checks the widget's signature for the given gateway order and payment.
    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
}

pub type DynPaymentGateway = Arc<dyn PaymentGateway>;

#[derive(Serialize)]
struct CreateOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
}

#[derive(Deserialize)]
struct CreateOrderResponse {
    id: String,
    amount: i64,
    currency: String,
}

pub struct HttpPaymentGateway {
    client: reqwest::Client,
    config: PaymentConfig,
}

impl HttpPaymentGateway {
    pub fn new(client: reqwest::Client, config: PaymentConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait::async_trait]
impl PaymentGateway for HttpPaymentGateway {
    fn key_id(&self) -> &str {
        &self.config.key_id
    }

    async fn create_order(
        &self,
        amount: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, PaymentError> {
        let url = format!("{}/orders", self.config.api_url.trim_end_matches('/'));

        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&CreateOrderRequest {
                amount,
                currency,
                receipt,
            })
            .send()
            .await
            .map_err(|e| PaymentError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Gateway(format!("{}: {}", status, body)));
        }

        let body: CreateOrderResponse = response
            .json()
            .await
            .map_err(|e| PaymentError::Gateway(e.to_string()))?;

        Ok(GatewayOrder {
            id: body.id,
            amount: body.amount,
            currency: body.currency,
        })
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        verify_signature(&self.config.key_secret, order_id, payment_id, signature)
    }
}

/// Constant-time check of a hex HMAC-SHA256 signature over `"{order_id}|{payment_id}"`.
pub fn verify_signature(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

    mac.verify_slice(&expected).is_ok()
}

/// Computes the signature the gateway would send. Used by tests and local tooling.
pub fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return String::new(),
    };
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

    hex::encode(mac.finalize().into_bytes())
}

/// Gateway used when no credentials are configured; every online payment fails cleanly.
pub struct UnconfiguredPaymentGateway;

#[async_trait::async_trait]
impl PaymentGateway for UnconfiguredPaymentGateway {
    fn key_id(&self) -> &str {
        ""
    }

    async fn create_order(
        &self,
        _amount: i64,
        _currency: &str,
        _receipt: &str,
    ) -> Result<GatewayOrder, PaymentError> {
        Err(PaymentError::NotConfigured)
    }

    fn verify_signature(&self, _order_id: &str, _payment_id: &str, _signature: &str) -> bool {
        false
    }
}
