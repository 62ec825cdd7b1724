//! Airport lookup HTTP service binary.
//!
//! # Configuration
//!
//! - `FLIGHTLOG_AIRPORTS_PATH` - local airport reference file
//! - `FLIGHTLOG_AIRPORTS_URL` - URL serving the airport reference file
//! - `FLIGHTLOG_HTTP_TIMEOUT_SECS` - fetch timeout for the URL (default: 10)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)

use tracing::info;

use flightlog_service_airports::{router, SERVICE_NAME};
use flightlog_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig, ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service(SERVICE_NAME);
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Metrics are optional.
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env();
    info!(port = config.port, "starting airports service");

    // The directory source may be an HTTP fetch on a blocking client.
    let load_config = config.clone();
    let state = tokio::task::spawn_blocking(move || AppState::load(&load_config)).await?;

    info!(
        airports = state.directory().len(),
        coordinates = state.coordinates().len(),
        "application state loaded"
    );

    let app = router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
