use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::Config, error::AppError, integration::mail::DynMailer,
    service::abandoned_cart::AbandonedCartService,
};

/// Runs every 15 minutes, on the quarter hour.
const REMINDER_SCHEDULE: &str = "0 */15 * * * *";

/// Starts the abandoned cart reminder scheduler
///
/// Every 15 minutes, emails customers whose cart has sat idle longer than
/// `abandoned_cart_idle_minutes`, up to `abandoned_cart_max_reminders` times per cart.
///
/// # Arguments
/// - `db`: Database connection
/// - `mailer`: Sender for the reminder emails
/// - `config`: Idle threshold, reminder cap and the storefront URL used in the email
pub async fn start_scheduler(
    db: DatabaseConnection,
    mailer: DynMailer,
    config: Arc<Config>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(REMINDER_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let mailer = mailer.clone();
        let config = config.clone();

        Box::pin(async move {
            if let Err(e) = send_reminders(&db, &mailer, &config).await {
                tracing::error!("Error sending abandoned cart reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Abandoned cart scheduler started");

    Ok(())
}

async fn send_reminders(
    db: &DatabaseConnection,
    mailer: &DynMailer,
    config: &Config,
) -> Result<(), AppError> {
    let sent = AbandonedCartService::new(db)
        .send_reminders(mailer.as_ref(), config)
        .await?;

    if sent > 0 {
        tracing::info!("Sent {} abandoned cart reminder(s)", sent);
    }

    Ok(())
}
