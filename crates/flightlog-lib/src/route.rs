//! Departure/arrival route geometry for map rendering.
//!
//! A [`RoutePlot`] only exists when both endpoints resolve in the
//! [`CoordinateTable`]. A missing endpoint suppresses the whole plot rather
//! than falling back to a default point.

use serde::Serialize;
use serde_json::{json, Value};

use crate::airport::normalize_code;
use crate::coordinates::{CoordinateTable, Coordinates};
use crate::error::{Error, Result};

/// Earth radius in nautical miles, used for distance calculations.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Default number of points used when drawing a great-circle line.
pub const DEFAULT_PATH_POINTS: usize = 64;

/// A resolved route endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEndpoint {
    pub code: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

/// Rectangle enclosing both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl Bounds {
    fn enclosing(a: Coordinates, b: Coordinates) -> Self {
        Self {
            south_west: Coordinates::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: Coordinates::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }
}

/// Geometry needed to draw a flight between two airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlot {
    pub departure: RouteEndpoint,
    pub arrival: RouteEndpoint,
    /// Arithmetic midpoint of the endpoints, used to centre the map.
    pub center: Coordinates,
    pub bounds: Bounds,
    /// Great-circle distance in nautical miles.
    pub distance_nm: f64,
    /// Initial true bearing from departure to arrival, in `[0, 360)`.
    pub initial_bearing_deg: f64,
}

impl RoutePlot {
    /// Resolve both endpoints independently and build the plot.
    ///
    /// Fails with [`Error::RouteUnplottable`] naming every code that did not
    /// resolve.
    pub fn resolve(table: &CoordinateTable, departure: &str, arrival: &str) -> Result<Self> {
        let dep = table.resolve(departure);
        let arr = table.resolve(arrival);

        match (dep, arr) {
            (Some(dep), Some(arr)) => Ok(Self::between(
                RouteEndpoint {
                    code: normalize_code(departure),
                    coordinates: dep,
                },
                RouteEndpoint {
                    code: normalize_code(arrival),
                    coordinates: arr,
                },
            )),
            _ => {
                let mut missing = Vec::new();
                if dep.is_none() {
                    missing.push(normalize_code(departure));
                }
                if arr.is_none() {
                    missing.push(normalize_code(arrival));
                }
                Err(Error::RouteUnplottable { missing })
            }
        }
    }

    /// Build a plot from two already resolved endpoints.
    pub fn between(departure: RouteEndpoint, arrival: RouteEndpoint) -> Self {
        let a = departure.coordinates;
        let b = arrival.coordinates;
        Self {
            center: Coordinates::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0),
            bounds: Bounds::enclosing(a, b),
            distance_nm: haversine_distance_nm(a, b),
            initial_bearing_deg: initial_bearing_deg(a, b),
            departure,
            arrival,
        }
    }

    /// Points along the great circle from departure to arrival, endpoints
    /// included. Fewer than two points yields just the endpoints.
    pub fn great_circle_points(&self, points: usize) -> Vec<Coordinates> {
        great_circle_points(self.departure.coordinates, self.arrival.coordinates, points)
    }

    /// GeoJSON `Feature` with a `LineString` geometry in `[lng, lat]` order.
    pub fn to_geojson(&self, points: usize) -> Value {
        let coordinates: Vec<[f64; 2]> = self
            .great_circle_points(points)
            .into_iter()
            .map(Coordinates::to_lng_lat)
            .collect();

        json!({
            "type": "Feature",
            "properties": {
                "departure": self.departure.code,
                "arrival": self.arrival.code,
                "distance_nm": self.distance_nm,
            },
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
        })
    }
}

/// Haversine distance between two points in nautical miles.
pub fn haversine_distance_nm(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_NM * c
}

/// Initial bearing from `from` to `to` in degrees (0-360).
pub fn initial_bearing_deg(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let x = delta_lng.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    let bearing = x.atan2(y).to_degrees();
    (bearing + 360.0) % 360.0
}

/// Interpolate `points` positions along the great circle between two points.
pub fn great_circle_points(from: Coordinates, to: Coordinates, points: usize) -> Vec<Coordinates> {
    if points < 2 {
        return vec![from, to];
    }

    let (lat1, lng1) = (from.lat.to_radians(), from.lng.to_radians());
    let (lat2, lng2) = (to.lat.to_radians(), to.lng.to_radians());
    let angular = haversine_distance_nm(from, to) / EARTH_RADIUS_NM;

    // Coincident endpoints: the circle is undefined.
    if angular.abs() < f64::EPSILON {
        return vec![from; points];
    }

    let sin_angular = angular.sin();
    let last = (points - 1) as f64;

    (0..points)
        .map(|i| {
            if i == 0 {
                return from;
            }
            if i == points - 1 {
                return to;
            }
            let fraction = i as f64 / last;
            let a = ((1.0 - fraction) * angular).sin() / sin_angular;
            let b = (fraction * angular).sin() / sin_angular;

            let x = a * lat1.cos() * lng1.cos() + b * lat2.cos() * lng2.cos();
            let y = a * lat1.cos() * lng1.sin() + b * lat2.cos() * lng2.sin();
            let z = a * lat1.sin() + b * lat2.sin();

            Coordinates::new(
                z.atan2((x * x + y * y).sqrt()).to_degrees(),
                y.atan2(x).to_degrees(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CoordinateTable {
        CoordinateTable::from_entries([
            ("KJFK", Coordinates::new(40.6413, -73.7781)),
            ("EGLL", Coordinates::new(51.4700, -0.4543)),
        ])
    }

    #[test]
    fn plots_when_both_endpoints_resolve() {
        let plot = RoutePlot::resolve(&table(), "kjfk", " egll ").expect("plots");
        assert_eq!(plot.departure.code, "KJFK");
        assert_eq!(plot.arrival.code, "EGLL");
        // JFK-LHR is roughly 2990 nm.
        assert!((plot.distance_nm - 2990.0).abs() < 20.0, "{}", plot.distance_nm);
        // Initial heading is north-east.
        assert!(plot.initial_bearing_deg > 45.0 && plot.initial_bearing_deg < 60.0);
    }

    #[test]
    fn missing_arrival_suppresses_plot() {
        match RoutePlot::resolve(&table(), "KJFK", "ZZZZ") {
            Err(Error::RouteUnplottable { missing }) => assert_eq!(missing, vec!["ZZZZ"]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn both_missing_reports_both() {
        match RoutePlot::resolve(&table(), "yyyy", "ZZZZ") {
            Err(Error::RouteUnplottable { missing }) => {
                assert_eq!(missing, vec!["YYYY", "ZZZZ"])
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn center_and_bounds() {
        let plot = RoutePlot::resolve(&table(), "KJFK", "EGLL").expect("plots");
        assert!((plot.center.lat - (40.6413 + 51.47) / 2.0).abs() < 1e-9);
        assert!((plot.center.lng - (-73.7781 + -0.4543) / 2.0).abs() < 1e-9);
        assert_eq!(plot.bounds.south_west, Coordinates::new(40.6413, -73.7781));
        assert_eq!(plot.bounds.north_east, Coordinates::new(51.47, -0.4543));
    }

    #[test]
    fn great_circle_includes_endpoints_and_bulges_north() {
        let plot = RoutePlot::resolve(&table(), "KJFK", "EGLL").expect("plots");
        let points = plot.great_circle_points(11);
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], plot.departure.coordinates);
        assert_eq!(points[10], plot.arrival.coordinates);
        // The great circle between these airports passes north of both.
        assert!(points[5].lat > 51.47);
    }

    #[test]
    fn great_circle_degenerate_cases() {
        let a = Coordinates::new(10.0, 10.0);
        assert_eq!(great_circle_points(a, a, 4), vec![a; 4]);
        let b = Coordinates::new(20.0, 20.0);
        assert_eq!(great_circle_points(a, b, 1), vec![a, b]);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Coordinates::new(0.0, 0.0);
        assert!((initial_bearing_deg(origin, Coordinates::new(1.0, 0.0)) - 0.0).abs() < 1e-6);
        assert!((initial_bearing_deg(origin, Coordinates::new(0.0, 1.0)) - 90.0).abs() < 1e-6);
        assert!((initial_bearing_deg(origin, Coordinates::new(-1.0, 0.0)) - 180.0).abs() < 1e-6);
        assert!((initial_bearing_deg(origin, Coordinates::new(0.0, -1.0)) - 270.0).abs() < 1e-6);
    }

    #[test]
    fn geojson_uses_lng_lat_order() {
        let plot = RoutePlot::resolve(&table(), "KJFK", "EGLL").expect("plots");
        let feature = plot.to_geojson(2);
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "LineString");
        let first = &feature["geometry"]["coordinates"][0];
        assert_eq!(first[0].as_f64(), Some(-73.7781));
        assert_eq!(first[1].as_f64(), Some(40.6413));
        assert_eq!(feature["properties"]["arrival"], "EGLL");
    }
}
