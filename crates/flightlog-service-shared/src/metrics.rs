//! Prometheus metrics for the flightlog services.
//!
//! - [`MetricsConfig`]: configuration read from the environment
//! - [`init_metrics`]: install the Prometheus recorder
//! - [`metrics_handler`]: axum handler for the `/metrics` endpoint
//! - `record_*` helpers for airport search, coordinate and route outcomes
//!
//! # Example
//!
//! ```no_run
//! use flightlog_service_shared::metrics::{MetricsConfig, init_metrics, metrics_handler};
//! use axum::{Router, routing::get};
//!
//! let config = MetricsConfig::default();
//! init_metrics(&config).expect("failed to initialize metrics");
//!
//! let app: Router = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
    /// Path for the metrics endpoint (e.g., "/metrics").
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_PATH`: Path for metrics endpoint (default: "/metrics")
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("METRICS_ENABLED").ok(),
            std::env::var("METRICS_PATH").ok(),
        )
    }

    fn from_values(enabled: Option<String>, path: Option<String>) -> Self {
        let enabled = enabled.map(|v| v.to_lowercase() != "false").unwrap_or(true);
        let path = path
            .filter(|p| p.starts_with('/'))
            .unwrap_or_else(|| "/metrics".to_string());
        Self { enabled, path }
    }
}

/// Initialize the Prometheus metrics recorder.
///
/// Must be called once at startup before any metrics are recorded.
///
/// # Errors
///
/// Returns an error if metrics are disabled, the recorder is already
/// installed, or the Prometheus builder fails.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if [`init_metrics`] has not been called.
pub fn prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

/// Axum handler for the `/metrics` endpoint.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    Disabled,
    /// The recorder has already been installed.
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Outcome label for lookups that either resolve or miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Hit,
    Miss,
}

impl LookupOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            LookupOutcome::Hit => "hit",
            LookupOutcome::Miss => "miss",
        }
    }
}

/// Record a directory search and the number of records it returned.
///
/// Increments `flightlog_airport_searches_total` and records the count to the
/// `flightlog_airport_search_results` histogram. `kind` is `browse` for an
/// empty query and `query` otherwise.
pub fn record_airport_search(kind: &str, results: usize) {
    metrics::counter!(
        "flightlog_airport_searches_total",
        "kind" => kind.to_string()
    )
    .increment(1);
    metrics::histogram!("flightlog_airport_search_results").record(results as f64);
}

/// Record a coordinate lookup.
///
/// Increments `flightlog_coordinate_lookups_total{outcome}`.
pub fn record_coordinate_lookup(outcome: LookupOutcome) {
    metrics::counter!(
        "flightlog_coordinate_lookups_total",
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Record a route plot attempt.
///
/// Increments `flightlog_routes_plotted_total{outcome}` with `ok` or
/// `unplottable`.
pub fn record_route_plotted(plotted: bool) {
    let outcome = if plotted { "ok" } else { "unplottable" };
    metrics::counter!(
        "flightlog_routes_plotted_total",
        "outcome" => outcome
    )
    .increment(1);
}
