mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::abandoned_cart, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let payment = startup::setup_payment_gateway(&config, &http_client);
    let mailer = startup::setup_mailer(&config)?;
    let chat_model = startup::setup_chat_model(&config, &http_client);

    startup::bootstrap_admin(&db, &config).await?;

    // Start abandoned cart reminder scheduler
    let scheduler_db = db.clone();
    let scheduler_mailer = mailer.clone();
    let scheduler_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) =
            abandoned_cart::start_scheduler(scheduler_db, scheduler_mailer, scheduler_config).await
        {
            tracing::error!("Abandoned cart scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(
            db,
            config.clone(),
            payment,
            chat_model,
            mailer,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Threadline listening on http://{}", addr);
    tracing::info!("API docs at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
