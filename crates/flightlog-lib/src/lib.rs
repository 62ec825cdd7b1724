//! Flightlog library entry points.
//!
//! This crate holds the airport kernel of the logbook: the airport directory
//! used for typeahead, the compiled-in coordinate table used for map plotting,
//! route geometry built from those coordinates, and the flight entry model.
//! Higher-level consumers (CLI, HTTP service) should only depend on the items
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod aircraft;
pub mod airport;
pub mod coordinates;
pub mod directory;
pub mod error;
pub mod flight;
pub mod route;
pub mod source;

pub use aircraft::{search_aircraft, suggest_aircraft, AIRCRAFT_CATALOG};
pub use airport::{normalize_code, parse_airports, AirportRecord};
pub use coordinates::{CoordinateRecord, CoordinateTable, Coordinates};
pub use directory::{search_airports, search_airports_with_limit, AirportDirectory, SEARCH_LIMIT};
pub use error::{Error, Result};
pub use flight::{
    Brake, EntryStep, EntryWizard, FlightDuration, FlightEntry, LandingRating, TimeOfDay,
};
pub use route::{haversine_distance_nm, initial_bearing_deg, RoutePlot, DEFAULT_PATH_POINTS};
pub use source::{
    default_airports_path, resolve_source, AirportSource, EmbeddedSource, FileSource, HttpSource,
    SourceOptions, TextSource,
};
