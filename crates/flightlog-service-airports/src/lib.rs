//! Airport lookup HTTP service.
//!
//! # Endpoints
//!
//! - `GET /api/v1/airports/{code}` - coordinates for one airport code; the
//!   body is `{lat, lng}` plus the normalized `code` and `content_type`
//! - `GET /api/v1/airports?q=&limit=` - directory typeahead search
//! - `GET /api/v1/aircraft?q=` - aircraft type search
//! - `GET /api/v1/route?from=&to=&points=` - route plot between two airports
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use flightlog_lib::{
    search_aircraft, AirportRecord, CoordinateRecord, RoutePlot, DEFAULT_PATH_POINTS,
};
use flightlog_service_shared::{
    from_lib_error, health_live, health_ready, metrics_handler, record_airport_search,
    record_coordinate_lookup, record_route_plotted, AircraftQuery, AirportSearchQuery, AppState,
    LookupOutcome, MetricsLayer, ProblemDetails, RequestId, RouteQuery, ServiceResponse, Validate,
};

/// Label used for this service in logs.
pub const SERVICE_NAME: &str = "airports";

/// Search results returned by `GET /api/v1/airports`.
#[derive(Debug, Serialize)]
struct AirportSearchResponse {
    query: String,
    count: usize,
    airports: Vec<AirportRecord>,
}

/// Aircraft results returned by `GET /api/v1/aircraft`.
#[derive(Debug, Serialize)]
struct AircraftResponse {
    query: String,
    count: usize,
    aircraft: Vec<&'static str>,
}

/// Route plot plus a GeoJSON line for the map renderer.
#[derive(Debug, Serialize)]
struct RouteResponse {
    #[serde(flatten)]
    plot: RoutePlot,
    geojson: Value,
}

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

impl<T> From<Box<ProblemDetails>> for Response<T> {
    fn from(problem: Box<ProblemDetails>) -> Self {
        Response::Error(*problem)
    }
}

/// Build the service router with metrics and request-id middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/airports", get(search_handler))
        .route("/api/v1/airports/{code}", get(coordinates_handler))
        .route("/api/v1/aircraft", get(aircraft_handler))
        .route("/api/v1/route", get(route_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(CorsLayer::permissive())
        .layer(MetricsLayer)
        .with_state(state)
}

/// Make sure the directory is populated without blocking a runtime worker.
async fn ensure_directory_loaded(state: &AppState) {
    if state.directory().is_loaded() {
        return;
    }
    let directory = state.directory_arc();
    if let Err(e) = tokio::task::spawn_blocking(move || {
        directory.ensure_loaded();
    })
    .await
    {
        warn!(error = %e, "airport directory load task failed");
    }
}

/// Handle GET /api/v1/airports requests.
async fn search_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(query): Query<AirportSearchQuery>,
) -> Response<AirportSearchResponse> {
    if let Err(problem) = query.validate(request_id.as_str()) {
        return problem.into();
    }

    ensure_directory_loaded(&state).await;

    let text = query.query();
    let airports: Vec<AirportRecord> = state
        .directory()
        .search_with_limit(text, query.effective_limit())
        .into_iter()
        .cloned()
        .collect();

    let kind = if text.is_empty() { "browse" } else { "query" };
    record_airport_search(kind, airports.len());

    info!(
        request_id = %request_id,
        query = %text,
        results = airports.len(),
        "airport search"
    );

    Response::Success(ServiceResponse::new(AirportSearchResponse {
        query: text.to_string(),
        count: airports.len(),
        airports,
    }))
}

/// Handle GET /api/v1/airports/{code} requests.
///
/// Responds `{code, lat, lng, content_type}`; `lat`/`lng` are the contract,
/// the other fields are extras. A miss is a 404 problem with suggestions.
async fn coordinates_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(code): Path<String>,
) -> Response<CoordinateRecord> {
    match state.coordinates().lookup(&code) {
        Ok(coordinates) => {
            record_coordinate_lookup(LookupOutcome::Hit);
            Response::Success(ServiceResponse::coordinates(&code, coordinates))
        }
        Err(e) => {
            record_coordinate_lookup(LookupOutcome::Miss);
            info!(request_id = %request_id, code = %code, "no coordinates for airport code");
            Response::Error(from_lib_error(&e, request_id.as_str()))
        }
    }
}

/// Handle GET /api/v1/aircraft requests.
async fn aircraft_handler(Query(query): Query<AircraftQuery>) -> Response<AircraftResponse> {
    let aircraft = search_aircraft(query.query());
    Response::Success(ServiceResponse::new(AircraftResponse {
        query: query.query().to_string(),
        count: aircraft.len(),
        aircraft,
    }))
}

/// Handle GET /api/v1/route requests.
async fn route_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(query): Query<RouteQuery>,
) -> Response<RouteResponse> {
    if let Err(problem) = query.validate(request_id.as_str()) {
        return problem.into();
    }

    match RoutePlot::resolve(state.coordinates(), &query.from, &query.to) {
        Ok(plot) => {
            record_route_plotted(true);
            info!(
                request_id = %request_id,
                from = %plot.departure.code,
                to = %plot.arrival.code,
                distance_nm = plot.distance_nm,
                "route plotted"
            );
            let geojson = plot.to_geojson(query.points.unwrap_or(DEFAULT_PATH_POINTS));
            Response::Success(ServiceResponse::new(RouteResponse { plot, geojson }))
        }
        Err(e) => {
            record_route_plotted(false);
            info!(request_id = %request_id, error = %e, "route not plottable");
            Response::Error(from_lib_error(&e, request_id.as_str()))
        }
    }
}
