use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// The gateway signature does not match the order and payment ids.
    #[error("Payment signature verification failed for gateway order {0}")]
    SignatureMismatch(String),

    /// Online payment requested but no gateway credentials are configured.
    #[error("Payment gateway is not configured")]
    NotConfigured,

    /// The gateway rejected the request or returned an unexpected body.
    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::SignatureMismatch(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Payment verification failed".to_string(),
            ),
            err => {
                tracing::error!("{}", err);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Payment could not be processed".to_string(),
                )
            }
        }
    }
}
