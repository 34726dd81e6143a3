use std::sync::Arc;

use api_rest::{AppState, ServerConfig};
use intake_core::{CoreConfig, FileRecordStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the intake service.
///
/// Serves the REST API, the intake form page and its static assets.
///
/// # Environment Variables
/// - `INTAKE_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `RECORD_DATA_DIR`: Directory for record storage (default: "record_data")
/// - `INTAKE_STATIC_DIR`: Static asset directory served under `/static` (default: "static")
/// - `INTAKE_TEMPLATE_DIR`: Directory holding `medical_form.html` (default: "templates")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration values are invalid or the record data directory cannot be created,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intake_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("intake_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_cfg = ServerConfig::from_env()?;
    let core_cfg = CoreConfig::from_env_value(std::env::var("RECORD_DATA_DIR").ok())?;
    core_cfg.ensure_data_dir()?;

    tracing::info!(
        "++ Record data in {}, templates in {}, static assets in {}",
        core_cfg.record_data_dir().display(),
        server_cfg.template_dir().display(),
        server_cfg.static_dir().display()
    );

    let store = FileRecordStore::new(Arc::new(core_cfg));
    let app = api_rest::router(AppState::new(Arc::new(store), &server_cfg));

    let listener = tokio::net::TcpListener::bind(server_cfg.addr()).await?;
    tracing::info!("++ Intake service started on {}", server_cfg.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Intake service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
