use label_service::config::{LabelConfig, SERVICE_NAME};
use label_service::services::{init_metrics, LabelStore, MongoDb};
use label_service::startup::Application;
use service_core::error::AppError;
use service_core::observability::{init_tracing, shutdown_tracing};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Configuration comes first; a missing connection string ends the process
    // before anything is bound.
    let config = LabelConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )
    .map_err(|e| AppError::InternalError(e.into()))?;

    init_metrics()?;

    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        database = %config.mongodb.database,
        "Starting label service"
    );

    let db = MongoDb::connect(&config.mongodb).await?;
    db.ping().await.map_err(|e| {
        tracing::error!("Failed to reach MongoDB at startup: {}", e);
        e
    })?;
    tracing::info!("Connected to MongoDB");

    let app = Application::build(&config, Arc::new(db)).await?;
    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("HTTP server error: {}", e);
        AppError::from(e)
    })?;

    shutdown_tracing();
    Ok(())
}
