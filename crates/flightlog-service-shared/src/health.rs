//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok", "degraded", or "not_ready: ...".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of airports in the directory (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airports_loaded: Option<usize>,

    /// Number of entries in the coordinate table (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: None,
            coordinates_loaded: None,
        }
    }

    /// Create a ready status. An empty directory reports `degraded`.
    pub fn ready(service: &str, version: &str, airports: usize, coordinates: usize) -> Self {
        let status = if airports == 0 { "degraded" } else { "ok" };
        Self {
            status: status.to_string(),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: Some(airports),
            coordinates_loaded: Some(coordinates),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: None,
            coordinates_loaded: None,
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"flightlog-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Only an empty coordinate table makes the service unready; a failed
/// directory load degrades search but the service keeps serving.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"flightlog-service-shared","version":"0.1.0","airports_loaded":64,"coordinates_loaded":294}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let coordinates = state.coordinates().len();
    if coordinates == 0 {
        let status = HealthStatus::not_ready(service, version, "no coordinates loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    // Only report what is already cached; never trigger a load from a probe.
    let airports = if state.directory().is_loaded() {
        state.directory().airports().len()
    } else {
        0
    };

    let status = HealthStatus::ready(service, version, airports, coordinates);
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightlog_lib::{AirportDirectory, AirportRecord, CoordinateTable};

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("test-service", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "test-service");
        assert!(status.airports_loaded.is_none());
        assert!(status.coordinates_loaded.is_none());
    }

    #[test]
    fn test_health_status_ready() {
        let status = HealthStatus::ready("test-service", "1.0.0", 64, 294);
        assert_eq!(status.status, "ok");
        assert_eq!(status.airports_loaded, Some(64));
        assert_eq!(status.coordinates_loaded, Some(294));
    }

    #[test]
    fn test_health_status_ready_degraded_without_airports() {
        let status = HealthStatus::ready("test-service", "1.0.0", 0, 294);
        assert_eq!(status.status, "degraded");
    }

    #[test]
    fn test_health_status_not_ready() {
        let status = HealthStatus::not_ready("test-service", "1.0.0", "no data");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no data"));
    }

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus::alive("airports", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("airports_loaded"));
    }

    #[tokio::test]
    async fn test_health_ready_statuses() {
        let empty_table = AppState::from_components(
            AirportDirectory::from_records(vec![AirportRecord::new("KJFK", "", "", "")]),
            CoordinateTable::default(),
        );
        let response = health_ready(State(empty_table)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let empty_directory = AppState::from_components(
            AirportDirectory::from_records(Vec::new()),
            CoordinateTable::builtin(),
        );
        let response = health_ready(State(empty_directory)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
