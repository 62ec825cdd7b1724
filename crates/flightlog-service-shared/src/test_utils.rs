//! Test utilities for service handler testing.
//!
//! Provides an [`AppState`] built from the fixture airport file and the
//! compiled-in coordinate table.

use std::path::PathBuf;
use std::sync::OnceLock;

use flightlog_lib::{AirportDirectory, CoordinateTable, FileSource};

use crate::state::AppState;

/// Path to the fixture airport reference file.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/airports.csv"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared test state loaded from the fixture file.
///
/// # Panics
///
/// Panics if the fixture yields no airports, which indicates a test
/// configuration issue.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let directory = AirportDirectory::new(FileSource::new(fixture_path()));
            assert!(
                !directory.ensure_loaded().is_empty(),
                "fixture airports not loaded from {:?}",
                fixture_path()
            );
            AppState::from_components(directory, CoordinateTable::builtin())
        })
        .clone()
}

/// State whose directory failed to load, for degraded-path tests.
pub fn degraded_state() -> AppState {
    AppState::from_components(
        AirportDirectory::new(FileSource::new("/nonexistent/flightlog/airports.csv")),
        CoordinateTable::builtin(),
    )
}

/// Absolute path to the fixture airport file.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Airport codes known to the fixture.
pub mod fixture_airports {
    pub const KJFK: &str = "KJFK";
    pub const KLAX: &str = "KLAX";
    pub const KLGA: &str = "KLGA";
    pub const EGLL: &str = "EGLL";
    pub const MMMX: &str = "MMMX";

    /// Every code in the fixture, in directory order.
    pub const ALL: [&str; 5] = [EGLL, KJFK, KLAX, KLGA, MMMX];
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}
