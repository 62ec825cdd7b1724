use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flightlog library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Airport reference file could not be located at the resolved path.
    #[error("airport reference data not found at {path}")]
    AirportSourceMissing { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for airport data")]
    ProjectDirsUnavailable,

    /// Raised when a code has no entry in the coordinate table.
    #[error("no coordinates for airport code: {code}{}", format_suggestions(.suggestions))]
    CoordinatesNotFound {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when one or both route endpoints cannot be resolved to coordinates.
    #[error("cannot plot route; no coordinates for {}", .missing.join(", "))]
    RouteUnplottable { missing: Vec<String> },

    /// Raised when a flight entry fails validation.
    #[error("invalid flight entry field '{field}': {message}")]
    InvalidFlightEntry { field: String, message: String },

    /// Raised when a duration string is not in `HH:MM` form.
    #[error("invalid duration '{value}'; expected HH:MM")]
    InvalidDuration { value: String },

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_not_found_lists_suggestions() {
        let err = Error::CoordinatesNotFound {
            code: "KJFX".to_string(),
            suggestions: vec!["KJFK".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "no coordinates for airport code: KJFX. Did you mean 'KJFK'?"
        );
    }

    #[test]
    fn coordinates_not_found_without_suggestions() {
        let err = Error::CoordinatesNotFound {
            code: "ZZZZ".to_string(),
            suggestions: vec![],
        };
        assert!(!err.to_string().contains("Did you mean"));
    }

    #[test]
    fn route_unplottable_names_every_missing_code() {
        let err = Error::RouteUnplottable {
            missing: vec!["ZZZZ".to_string(), "YYYY".to_string()],
        };
        assert!(err.to_string().contains("ZZZZ, YYYY"));
    }
}
