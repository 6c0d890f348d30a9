//! Outbound email.

use std::sync::Arc;

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::SmtpConfig, error::internal::InternalError};

#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body_text: String,
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), InternalError>;
}

pub type DynMailer = Arc<dyn Mailer>;

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig, from: String) -> Result<Self, InternalError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| InternalError::Mail(format!("Failed to create SMTP transport: {}", e)))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), InternalError> {
        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| InternalError::Mail(format!("Invalid from address: {}", e)))?,
            )
            .to(message
                .to
                .parse()
                .map_err(|e| InternalError::Mail(format!("Invalid to address: {}", e)))?)
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body_text)
            .map_err(|e| InternalError::Mail(format!("Failed to build email: {}", e)))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| InternalError::Mail(format!("Failed to send email via SMTP: {}", e)))?;

        Ok(())
    }
}

/// Mailer used when SMTP is not configured; messages are only logged.
pub struct LogMailer;

#[async_trait::async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), InternalError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "Email (not sent, SMTP unconfigured)"
        );
        Ok(())
    }
}
