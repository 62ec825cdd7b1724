//! Success bodies for the airport endpoints.
//!
//! Payload fields are flattened to the top level next to `content_type`, so a
//! coordinate lookup reads `{"code":"KJFK","lat":..,"lng":..,"content_type":..}`
//! and clients that only want `{lat, lng}` can ignore the rest.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use flightlog_lib::{normalize_code, CoordinateRecord, Coordinates};
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Successful response carrying its content type, mirroring `ProblemDetails`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceResponse<T> {
    #[serde(flatten)]
    pub data: T,
    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: JSON_CONTENT_TYPE.to_string(),
        }
    }
}

impl ServiceResponse<CoordinateRecord> {
    /// Body for a coordinate hit; `code` is echoed in normalized form.
    pub fn coordinates(code: &str, coordinates: Coordinates) -> Self {
        Self::new(CoordinateRecord {
            code: normalize_code(code),
            coordinates,
        })
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use serde_json::{json, Value};

    #[test]
    fn test_coordinate_body_shape() {
        let response = ServiceResponse::coordinates(" kjfk ", Coordinates::new(40.6413, -73.7781));
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(
            body,
            json!({
                "code": "KJFK",
                "lat": 40.6413,
                "lng": -73.7781,
                "content_type": "application/json",
            })
        );
    }

    #[test]
    fn test_search_payload_is_flattened() {
        #[derive(Serialize)]
        struct Listing {
            query: &'static str,
            count: usize,
            airports: Vec<&'static str>,
        }

        let body = serde_json::to_value(ServiceResponse::new(Listing {
            query: "new york",
            count: 2,
            airports: vec!["KJFK", "KLGA"],
        }))
        .unwrap();

        assert_eq!(body["count"], 2);
        assert_eq!(body["airports"][1], "KLGA");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn test_into_response_is_json_ok() {
        let response =
            ServiceResponse::coordinates("EGLL", Coordinates::new(51.47, -0.4543)).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            JSON_CONTENT_TYPE
        );
    }

    #[test]
    fn test_zero_coordinates_still_serialize() {
        let body: Value =
            serde_json::to_value(ServiceResponse::coordinates("NULL", Coordinates::new(0.0, 0.0)))
                .unwrap();
        assert_eq!(body["lat"], 0.0);
        assert_eq!(body["lng"], 0.0);
    }
}
