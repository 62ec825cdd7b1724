//! In-memory airport directory with typeahead search.
//!
//! An [`AirportDirectory`] owns an injected [`AirportSource`] and a lazily
//! populated cache. The first call to [`AirportDirectory::ensure_loaded`]
//! reads and parses the source; every later call returns the cached records.
//! A failed load degrades to an empty directory and is reported through
//! `tracing` only.

use std::fmt;

use once_cell::sync::OnceCell;
use tracing::{debug, error, info};

use crate::airport::{normalize_code, parse_airports, AirportRecord};
use crate::error::Result;
use crate::source::{AirportSource, EmbeddedSource, TextSource};

/// Maximum number of records returned by a search.
pub const SEARCH_LIMIT: usize = 50;

/// Lazily loaded, immutable airport directory.
pub struct AirportDirectory {
    source: Box<dyn AirportSource>,
    airports: OnceCell<Vec<AirportRecord>>,
}

impl AirportDirectory {
    /// Create a directory that will read from `source` on first use.
    pub fn new(source: impl AirportSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    /// Create a directory from an already boxed source.
    pub fn from_boxed(source: Box<dyn AirportSource>) -> Self {
        Self {
            source,
            airports: OnceCell::new(),
        }
    }

    /// Directory backed by the dataset compiled into the library.
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Pre-populated directory; records are sorted by code and never re-read.
    pub fn from_records(mut records: Vec<AirportRecord>) -> Self {
        records.sort_by(|a, b| a.code.cmp(&b.code));
        records.dedup_by(|later, earlier| later.code == earlier.code);
        Self {
            source: Box::new(TextSource::default()),
            airports: OnceCell::with_value(records),
        }
    }

    /// Load the directory if needed and return the cached records.
    ///
    /// Never fails: an unreadable or unparsable source yields an empty slice.
    /// The outcome (including an empty result) is cached for the life of the
    /// directory.
    pub fn ensure_loaded(&self) -> &[AirportRecord] {
        if let Some(airports) = self.airports.get() {
            debug!(airports = airports.len(), "airport directory cache hit");
            return airports;
        }

        self.airports.get_or_init(|| match self.load() {
            Ok(airports) => {
                info!(
                    source = %self.source.describe(),
                    airports = airports.len(),
                    "airport directory loaded"
                );
                airports
            }
            Err(err) => {
                error!(
                    source = %self.source.describe(),
                    error = %err,
                    "failed to load airport directory; continuing with no airports"
                );
                Vec::new()
            }
        })
    }

    fn load(&self) -> Result<Vec<AirportRecord>> {
        let text = self.source.read()?;
        parse_airports(&text)
    }

    /// Alias for [`ensure_loaded`](Self::ensure_loaded).
    pub fn airports(&self) -> &[AirportRecord] {
        self.ensure_loaded()
    }

    /// Whether the cache has been populated.
    pub fn is_loaded(&self) -> bool {
        self.airports.get().is_some()
    }

    /// Number of airports, loading first if needed.
    pub fn len(&self) -> usize {
        self.ensure_loaded().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ensure_loaded().is_empty()
    }

    /// Typeahead search with the default limit of [`SEARCH_LIMIT`].
    pub fn search(&self, query: &str) -> Vec<&AirportRecord> {
        search_airports(query, self.ensure_loaded())
    }

    /// Typeahead search capped at `limit` (never more than [`SEARCH_LIMIT`]).
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&AirportRecord> {
        search_airports_with_limit(query, self.ensure_loaded(), limit)
    }

    /// Exact lookup by code (case- and whitespace-insensitive).
    pub fn get(&self, code: &str) -> Option<&AirportRecord> {
        let code = normalize_code(code);
        let airports = self.ensure_loaded();
        airports
            .binary_search_by(|airport| airport.code.as_str().cmp(code.as_str()))
            .ok()
            .map(|index| &airports[index])
    }

    /// Description of the backing source.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

impl fmt::Debug for AirportDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirportDirectory")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .field("airports", &self.airports.get().map(Vec::len))
            .finish()
    }
}

/// Search `airports` for typeahead suggestions.
///
/// An empty query returns the first [`SEARCH_LIMIT`] records in directory
/// order. Otherwise a record matches when the upper-cased query occurs in its
/// code, or the lower-cased query occurs in its lower-cased name or city.
/// Matches keep directory order and are truncated to [`SEARCH_LIMIT`].
pub fn search_airports<'a>(query: &str, airports: &'a [AirportRecord]) -> Vec<&'a AirportRecord> {
    search_airports_with_limit(query, airports, SEARCH_LIMIT)
}

/// As [`search_airports`], with a caller-supplied cap no larger than [`SEARCH_LIMIT`].
pub fn search_airports_with_limit<'a>(
    query: &str,
    airports: &'a [AirportRecord],
    limit: usize,
) -> Vec<&'a AirportRecord> {
    let limit = limit.min(SEARCH_LIMIT);

    if query.is_empty() {
        return airports.iter().take(limit).collect();
    }

    let upper = query.to_uppercase();
    let lower = query.to_lowercase();

    airports
        .iter()
        .filter(|airport| {
            airport.code.contains(&upper)
                || airport.name.to_lowercase().contains(&lower)
                || airport.city.to_lowercase().contains(&lower)
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct CountingSource {
        text: String,
        reads: Arc<AtomicUsize>,
    }

    impl AirportSource for CountingSource {
        fn read(&self) -> Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[derive(Debug)]
    struct FailingSource;

    impl AirportSource for FailingSource {
        fn read(&self) -> Result<String> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "gone",
            )))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn kjfk() -> AirportRecord {
        AirportRecord::new("KJFK", "John F Kennedy Intl", "New York", "United States")
    }

    fn numbered(count: usize) -> Vec<AirportRecord> {
        (0..count)
            .map(|i| AirportRecord::new(format!("K{:03}", i), format!("Field {i}"), "Town", ""))
            .collect()
    }

    #[test]
    fn loads_once_and_caches() {
        let reads = Arc::new(AtomicUsize::new(0));
        let directory = AirportDirectory::new(CountingSource {
            text: "IATA,ICAO,Name,Country,City,Info\nJFK,KJFK,John F Kennedy Intl,United States,New York,\n"
                .to_string(),
            reads: Arc::clone(&reads),
        });

        assert!(!directory.is_loaded());
        let first = directory.ensure_loaded().to_vec();
        let second = directory.ensure_loaded().to_vec();

        assert_eq!(first, second);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
        assert!(directory.is_loaded());
    }

    #[test]
    fn failed_load_degrades_to_empty() {
        let directory = AirportDirectory::new(FailingSource);
        assert!(directory.ensure_loaded().is_empty());
        assert!(directory.search("").is_empty());
        assert!(directory.search("jfk").is_empty());
        assert!(directory.is_loaded());
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let directory = AirportDirectory::new(crate::source::FileSource::new(
            "/nonexistent/flightlog/airports.csv",
        ));
        assert_eq!(directory.len(), 0);
        assert!(directory.get("KJFK").is_none());
    }

    #[test]
    fn empty_query_browses_first_fifty() {
        let directory = AirportDirectory::from_records(numbered(120));
        let results = directory.search("");
        assert_eq!(results.len(), SEARCH_LIMIT);
        assert_eq!(results[0].code, "K000");
        assert_eq!(results[49].code, "K049");
    }

    #[test]
    fn empty_query_with_small_directory_returns_all() {
        let directory = AirportDirectory::from_records(numbered(7));
        assert_eq!(directory.search("").len(), 7);
    }

    #[test]
    fn matches_code_name_and_city() {
        let directory = AirportDirectory::from_records(vec![
            kjfk(),
            AirportRecord::new("KLAX", "Los Angeles Intl", "Los Angeles", "United States"),
        ]);

        for query in ["jfk", "kennedy", "new york", "KJ", "York"] {
            let results = directory.search(query);
            assert_eq!(results.len(), 1, "query {query}");
            assert_eq!(results[0].code, "KJFK");
        }
        assert_eq!(directory.search("angeles")[0].code, "KLAX");
        assert!(directory.search("heathrow").is_empty());
    }

    fn satisfies_substring_rule(query: &str, airport: &AirportRecord) -> bool {
        airport.code.contains(&query.to_uppercase())
            || airport.name.to_lowercase().contains(&query.to_lowercase())
            || airport.city.to_lowercase().contains(&query.to_lowercase())
    }

    #[test]
    fn every_result_matches_on_some_field() {
        let fixture = AirportDirectory::new(TextSource::new(include_str!(
            "../../../docs/fixtures/airports.csv"
        )));
        let numbered = AirportDirectory::from_records(numbered(120));
        let queries = [
            "k", "K0", "05", "field 1", "TOWN", "jfk", "new", "york", "los", "lhr", "egl",
            "mexico", "Intl", " ", "zz",
        ];

        for directory in [&fixture, &numbered] {
            let total = directory.len();
            for query in queries {
                let results = directory.search(query);
                assert!(results.len() <= SEARCH_LIMIT, "query {query:?}");
                for airport in &results {
                    assert!(
                        satisfies_substring_rule(query, airport),
                        "{} does not match {query:?}",
                        airport.code
                    );
                }
                let expected = directory
                    .airports()
                    .iter()
                    .filter(|airport| satisfies_substring_rule(query, airport))
                    .count()
                    .min(SEARCH_LIMIT);
                assert_eq!(results.len(), expected, "query {query:?} over {total}");
            }
        }
    }

    #[test]
    fn substring_is_unanchored() {
        let directory = AirportDirectory::from_records(vec![kjfk()]);
        assert_eq!(directory.search("FK").len(), 1);
        assert_eq!(directory.search("nnedy").len(), 1);
    }

    #[test]
    fn search_truncates_to_limit_in_directory_order() {
        let directory = AirportDirectory::from_records(numbered(80));
        let results = directory.search("field");
        assert_eq!(results.len(), SEARCH_LIMIT);
        assert!(results.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn caller_limit_cannot_exceed_default() {
        let directory = AirportDirectory::from_records(numbered(80));
        assert_eq!(directory.search_with_limit("", 5).len(), 5);
        assert_eq!(directory.search_with_limit("", 500).len(), SEARCH_LIMIT);
    }

    #[test]
    fn exact_get_is_case_insensitive() {
        let directory = AirportDirectory::from_records(vec![kjfk()]);
        assert_eq!(directory.get(" kjfk ").map(|a| a.code.as_str()), Some("KJFK"));
        assert!(directory.get("KLAX").is_none());
    }

    #[test]
    fn debug_reports_load_state() {
        let directory = AirportDirectory::from_records(vec![kjfk()]);
        let debug = format!("{:?}", directory);
        assert!(debug.contains("AirportDirectory"));
        assert!(debug.contains("loaded: true"));
    }
}
