//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection is a pool and the
//! integrations are reference counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    integration::{llm::DynChatModel, mail::DynMailer, payment::DynPaymentGateway},
};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    pub config: Arc<Config>,

    /// Gateway used to create and verify online payments.
    pub payment: DynPaymentGateway,

    /// Hosted model for the shopping assistant; `None` when no API key is configured.
    pub chat_model: Option<DynChatModel>,

    /// Transactional email sender.
    pub mailer: DynMailer,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        config: Arc<Config>,
        payment: DynPaymentGateway,
        chat_model: Option<DynChatModel>,
        mailer: DynMailer,
    ) -> Self {
        Self {
            db,
            config,
            payment,
            chat_model,
            mailer,
        }
    }
}
