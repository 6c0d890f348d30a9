use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    integration::{
        llm::{DynChatModel, HttpChatModel},
        mail::{DynMailer, LogMailer, SmtpMailer},
        payment::{DynPaymentGateway, HttpPaymentGateway, UnconfiguredPaymentGateway},
    },
    service::auth::AuthService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs all
/// pending SeaORM migrations so the schema is up to date before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by the payment gateway and the chat model.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("threadline/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Payment gateway for online orders; falls back to one that refuses every online payment
/// when no gateway keys are configured.
pub fn setup_payment_gateway(config: &Config, client: &reqwest::Client) -> DynPaymentGateway {
    match &config.payment {
        Some(payment) => Arc::new(HttpPaymentGateway::new(client.clone(), payment.clone())),
        None => {
            tracing::warn!("PAYMENT_KEY_ID not set; online payments are disabled");
            Arc::new(UnconfiguredPaymentGateway)
        }
    }
}

/// SMTP mailer when configured, otherwise a mailer that only logs outgoing messages.
pub fn setup_mailer(config: &Config) -> Result<DynMailer, AppError> {
    match &config.smtp {
        Some(smtp) => Ok(Arc::new(SmtpMailer::new(smtp, config.mail_from.clone())?)),
        None => {
            tracing::warn!("SMTP_HOST not set; emails will be logged instead of sent");
            Ok(Arc::new(LogMailer))
        }
    }
}

pub fn setup_chat_model(config: &Config, client: &reqwest::Client) -> Option<DynChatModel> {
    match &config.llm {
        Some(llm) => Some(Arc::new(HttpChatModel::new(client.clone(), llm.clone()))),
        None => {
            tracing::info!("LLM_API_KEY not set; the shopping assistant will use canned replies");
            None
        }
    }
}

/// Creates the first admin account from `ADMIN_EMAIL` and `ADMIN_PASSWORD` if no admin exists.
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if config.admin_email.is_none() || config.admin_password.is_none() {
        tracing::debug!("ADMIN_EMAIL or ADMIN_PASSWORD not set; skipping admin bootstrap");
        return Ok(());
    }

    AuthService::new(db, config).bootstrap_admin().await?;

    Ok(())
}
