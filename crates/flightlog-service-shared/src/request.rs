//! Query parameter types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use flightlog_lib::SEARCH_LIMIT;

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Query for `GET /api/v1/airports`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirportSearchQuery {
    /// Typeahead text. Absent is the same as empty: browse.
    #[serde(default)]
    pub q: Option<String>,

    /// Optional cap on results, 1 to [`SEARCH_LIMIT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl AirportSearchQuery {
    /// The query text, with absent treated as empty.
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    /// The effective result cap.
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(SEARCH_LIMIT)
    }
}

impl Validate for AirportSearchQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        match self.limit {
            Some(0) => Err(Box::new(ProblemDetails::bad_request(
                "The 'limit' parameter must be at least 1",
                request_id,
            ))),
            Some(limit) if limit > SEARCH_LIMIT => Err(Box::new(ProblemDetails::bad_request(
                format!("The 'limit' parameter cannot exceed {}", SEARCH_LIMIT),
                request_id,
            ))),
            _ => Ok(()),
        }
    }
}

/// Query for `GET /api/v1/aircraft`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AircraftQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl AircraftQuery {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// Query for `GET /api/v1/route`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Departure airport code.
    #[serde(default)]
    pub from: String,

    /// Arrival airport code.
    #[serde(default)]
    pub to: String,

    /// Number of great-circle points in the GeoJSON line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
}

/// Upper bound on requested great-circle points.
pub const MAX_ROUTE_POINTS: usize = 512;

impl Validate for RouteQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.from.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'from' parameter is required and cannot be empty",
                request_id,
            )));
        }

        if self.to.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'to' parameter is required and cannot be empty",
                request_id,
            )));
        }

        if let Some(points) = self.points {
            if !(2..=MAX_ROUTE_POINTS).contains(&points) {
                return Err(Box::new(ProblemDetails::bad_request(
                    format!(
                        "The 'points' parameter must be between 2 and {}",
                        MAX_ROUTE_POINTS
                    ),
                    request_id,
                )));
            }
        }

        Ok(())
    }
}
