//! Shared infrastructure for flightlog HTTP services.
//!
//! - [`AppState`]: airport directory and coordinate table shared by handlers
//! - [`health`]: liveness/readiness handlers
//! - [`ProblemDetails`]: RFC 9457 Problem Details for error responses
//! - [`ServiceResponse`]: wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: structured JSON logging setup
//! - [`middleware`]: request tracking and metrics middleware
//! - [`ServiceConfig`]: environment-driven settings
//! - Query types with validation for each endpoint
//!
//! # Architecture
//!
//! Services follow a thin-handler pattern where all airport logic resides in
//! `flightlog-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse query parameters                                   │
//! │  - Validate parameters                                      │
//! │  - Call flightlog-lib APIs                                  │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixture state for handler testing.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod config;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ServiceConfig, DEFAULT_PORT};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, json_layer, LogFormat, LoggingConfig, ServiceJsonFormat};
pub use metrics::{
    init_metrics, metrics_handler, record_airport_search, record_coordinate_lookup,
    record_route_plotted, LookupOutcome, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId, REQUEST_ID_HEADER};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_AIRPORT_NOT_FOUND, PROBLEM_INTERNAL_ERROR,
    PROBLEM_INVALID_REQUEST, PROBLEM_ROUTE_UNPLOTTABLE, PROBLEM_SERVICE_UNAVAILABLE,
};
pub use request::{AircraftQuery, AirportSearchQuery, RouteQuery, Validate, MAX_ROUTE_POINTS};
pub use response::ServiceResponse;
pub use state::AppState;
