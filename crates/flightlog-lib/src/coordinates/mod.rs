//! Airport code to coordinate resolution for map plotting.
//!
//! The [`CoordinateTable`] is deliberately independent of the airport
//! directory: it is a small compiled-in table keyed by upper-case code, and a
//! miss here says nothing about whether the directory knows the airport.

mod builtin;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::airport::normalize_code;
use crate::error::{Error, Result};

use builtin::BUILTIN_COORDINATES;

/// Minimum Jaro-Winkler similarity for a code to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Number of suggestions attached to a lookup miss.
const MAX_SUGGESTIONS: usize = 3;

/// Latitude/longitude pair in decimal degrees (positive = north/east).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `[lng, lat]` order used by GeoJSON.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// One row of the coordinate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    pub code: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

/// Immutable code -> coordinates table.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    entries: HashMap<String, Coordinates>,
}

impl CoordinateTable {
    /// The compiled-in table of curated airports.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_COORDINATES
                .iter()
                .map(|&(code, lat, lng)| (code, Coordinates::new(lat, lng))),
        )
    }

    /// Build a table from arbitrary entries. Keys are trimmed and upper-cased;
    /// later duplicates replace earlier ones.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Coordinates)>,
        K: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(code, coords)| (normalize_code(code.as_ref()), coords))
            .collect();
        Self { entries }
    }

    /// Resolve a code, ignoring case and surrounding whitespace.
    ///
    /// A miss is `None`; it is never reported as a zero coordinate.
    pub fn resolve(&self, code: &str) -> Option<Coordinates> {
        self.entries.get(&normalize_code(code)).copied()
    }

    /// Like [`resolve`](Self::resolve) but reports a miss as
    /// [`Error::CoordinatesNotFound`] with similar codes attached.
    pub fn lookup(&self, code: &str) -> Result<Coordinates> {
        self.resolve(code).ok_or_else(|| Error::CoordinatesNotFound {
            code: normalize_code(code),
            suggestions: self.suggestions(code, MAX_SUGGESTIONS),
        })
    }

    /// Whether the table has an entry for `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&normalize_code(code))
    }

    /// Codes similar to `code`, best match first.
    pub fn suggestions(&self, code: &str, limit: usize) -> Vec<String> {
        let needle = normalize_code(code);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &String)> = self
            .entries
            .keys()
            .map(|candidate| (strsim::jaro_winkler(&needle, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    /// All records sorted by code.
    pub fn records(&self) -> Vec<CoordinateRecord> {
        let mut records: Vec<CoordinateRecord> = self
            .entries
            .iter()
            .map(|(code, coordinates)| CoordinateRecord {
                code: code.clone(),
                coordinates: *coordinates,
            })
            .collect();
        records.sort_by(|a, b| a.code.cmp(&b.code));
        records
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_kjfk() {
        let table = CoordinateTable::builtin();
        assert_eq!(
            table.resolve("KJFK"),
            Some(Coordinates::new(40.6413, -73.7781))
        );
    }

    #[test]
    fn resolve_ignores_case_and_whitespace() {
        let table = CoordinateTable::builtin();
        let expected = table.resolve("KJFK");
        assert!(expected.is_some());
        assert_eq!(table.resolve(" kjfk "), expected);
        assert_eq!(table.resolve("kjfk"), expected);
        assert_eq!(table.resolve("\tKjFk\n"), expected);
    }

    #[test]
    fn miss_is_none_not_zero() {
        let table = CoordinateTable::builtin();
        assert_eq!(table.resolve("ZZZZ"), None);
        assert_eq!(table.resolve(""), None);
    }

    #[test]
    fn stored_keys_are_normalized() {
        let table = CoordinateTable::from_entries([(" egll ", Coordinates::new(51.47, -0.4543))]);
        assert!(table.contains("EGLL"));
        assert_eq!(table.records()[0].code, "EGLL");
    }

    #[test]
    fn zero_coordinate_is_a_hit() {
        let table = CoordinateTable::from_entries([("NULL", Coordinates::new(0.0, 0.0))]);
        assert_eq!(table.resolve("null"), Some(Coordinates::new(0.0, 0.0)));
    }

    #[test]
    fn lookup_miss_carries_suggestions() {
        let table = CoordinateTable::builtin();
        match table.lookup("kjfx") {
            Err(Error::CoordinatesNotFound { code, suggestions }) => {
                assert_eq!(code, "KJFX");
                assert!(suggestions.contains(&"KJFK".to_string()));
                assert!(suggestions.len() <= MAX_SUGGESTIONS);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn dissimilar_codes_get_no_suggestions() {
        let table = CoordinateTable::from_entries([("KJFK", Coordinates::new(40.6413, -73.7781))]);
        assert!(table.suggestions("ZZZZ", 3).is_empty());
        assert!(table.suggestions("  ", 3).is_empty());
    }

    #[test]
    fn builtin_covers_several_continents() {
        let table = CoordinateTable::builtin();
        for code in ["EGLL", "RJTT", "YSSY", "SBGR", "FAOR", "CYYZ", "MMMX", "PANC"] {
            assert!(table.contains(code), "{code} missing");
        }
        assert!(table.len() > 250);
    }

    #[test]
    fn records_are_sorted() {
        let records = CoordinateTable::builtin().records();
        assert!(records.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn coordinate_json_shape() {
        let json = serde_json::to_string(&Coordinates::new(40.6413, -73.7781)).unwrap();
        assert_eq!(json, r#"{"lat":40.6413,"lng":-73.7781}"#);
    }
}
