//! Application state for HTTP services.
//!
//! Handlers reach the airport directory and the coordinate table through the
//! shared [`AppState`].

use std::sync::Arc;

use flightlog_lib::{
    resolve_source, AirportDirectory, AirportSource, CoordinateTable, Error as LibError,
    FileSource, TextSource,
};

use crate::config::ServiceConfig;

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally); share it via axum's `State`
/// extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use flightlog_service_shared::{AppState, ServiceConfig};
///
/// async fn handler(State(state): State<AppState>) {
///     let hits = state.directory().search("jfk");
/// }
///
/// let state = AppState::load(&ServiceConfig::from_env());
/// let app = Router::new()
///     .route("/api/v1/airports", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    directory: Arc<AirportDirectory>,
    coordinates: CoordinateTable,
}

impl AppState {
    /// Build state from configuration and populate the directory.
    ///
    /// Blocking: the directory may be fetched over HTTP. Call from
    /// `tokio::task::spawn_blocking` inside a runtime. A configured file that
    /// does not exist still yields a state: the directory load logs the
    /// failure and serves no airports, and readiness reports `degraded`.
    pub fn load(config: &ServiceConfig) -> Self {
        let source = select_source(config);
        tracing::info!(source = %source.describe(), "loading airport directory");

        let directory = AirportDirectory::from_boxed(source);
        let airports = directory.ensure_loaded().len();
        if airports == 0 {
            tracing::warn!("airport directory is empty; search will return no results");
        }

        let coordinates = CoordinateTable::builtin();
        tracing::info!(
            airports = airports,
            coordinates = coordinates.len(),
            "application state loaded"
        );

        Self::from_components(directory, coordinates)
    }

    /// Create application state from pre-built components.
    pub fn from_components(directory: AirportDirectory, coordinates: CoordinateTable) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                directory: Arc::new(directory),
                coordinates,
            }),
        }
    }

    /// Access the airport directory.
    pub fn directory(&self) -> &AirportDirectory {
        &self.inner.directory
    }

    /// Shared handle to the directory, for moving into blocking tasks.
    pub fn directory_arc(&self) -> Arc<AirportDirectory> {
        Arc::clone(&self.inner.directory)
    }

    /// Access the coordinate table.
    pub fn coordinates(&self) -> &CoordinateTable {
        &self.inner.coordinates
    }
}

/// Pick the configured source, keeping a missing file as a [`FileSource`] so
/// the failed read surfaces through the directory's degraded load.
fn select_source(config: &ServiceConfig) -> Box<dyn AirportSource> {
    match resolve_source(&config.sources) {
        Ok(source) => source,
        Err(LibError::AirportSourceMissing { path }) => {
            tracing::warn!(path = %path.display(), "configured airport file does not exist");
            Box::new(FileSource::new(path))
        }
        Err(err) => {
            tracing::error!(error = %err, "airport source unavailable; continuing with no airports");
            Box::new(TextSource::default())
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("directory", &self.inner.directory)
            .field("coordinate_count", &self.inner.coordinates.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightlog_lib::{AirportRecord, Coordinates};

    fn minimal_state() -> AppState {
        AppState::from_components(
            AirportDirectory::from_records(vec![AirportRecord::new(
                "KJFK",
                "John F Kennedy Intl",
                "New York",
                "United States",
            )]),
            CoordinateTable::from_entries([("KJFK", Coordinates::new(40.6413, -73.7781))]),
        )
    }

    #[test]
    fn test_app_state_from_components() {
        let state = minimal_state();
        assert_eq!(state.directory().len(), 1);
        assert!(state.coordinates().contains("kjfk"));
    }

    #[test]
    fn test_app_state_clone_shares_directory() {
        let state1 = minimal_state();
        let state2 = state1.clone();
        assert!(Arc::ptr_eq(&state1.directory_arc(), &state2.directory_arc()));
    }

    #[test]
    fn test_app_state_debug() {
        let debug = format!("{:?}", minimal_state());
        assert!(debug.contains("AppState"));
        assert!(debug.contains("coordinate_count"));
    }

    #[test]
    fn test_app_state_load_missing_explicit_path_degrades() {
        let config = ServiceConfig {
            sources: flightlog_lib::SourceOptions::default()
                .with_path("/nonexistent/flightlog/airports.csv"),
            ..ServiceConfig::default()
        };
        let state = AppState::load(&config);
        assert!(state.directory().is_loaded());
        assert!(state.directory().is_empty());
        assert!(state
            .directory()
            .source_description()
            .contains("/nonexistent/flightlog/airports.csv"));
        assert!(!state.coordinates().is_empty());
    }

    #[test]
    fn test_app_state_load_fixture() {
        let config = ServiceConfig {
            sources: flightlog_lib::SourceOptions::default().with_path(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../../docs/fixtures/airports.csv"
            )),
            ..ServiceConfig::default()
        };
        let state = AppState::load(&config);
        assert!(state.directory().is_loaded());
        assert_eq!(state.directory().len(), 5);
        assert!(!state.coordinates().is_empty());
    }
}
