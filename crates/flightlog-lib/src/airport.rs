//! Airport reference records and the delimited-text parser that produces them.
//!
//! The reference format is comma-separated with a header row. Each data row
//! carries `IATA, ICAO, name, country, city, info`; only the ICAO code, name,
//! country and city are kept. Fields may be double-quoted to embed commas.
//!
//! Rows are parsed one line at a time, so an unbalanced quote only damages
//! its own row.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

const ICAO_FIELD: usize = 1;
const NAME_FIELD: usize = 2;
const COUNTRY_FIELD: usize = 3;
const CITY_FIELD: usize = 4;

/// A single airport in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportRecord {
    /// Upper-case ICAO identifier; unique within a directory.
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

impl AirportRecord {
    /// Build a record, upper-casing and trimming the code.
    pub fn new(
        code: impl AsRef<str>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            code: normalize_code(code.as_ref()),
            name: name.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// Display label used by typeahead lists, e.g. `KJFK - John F Kennedy Intl (New York)`.
    pub fn label(&self) -> String {
        match (self.name.is_empty(), self.city.is_empty()) {
            (true, _) => self.code.clone(),
            (false, true) => format!("{} - {}", self.code, self.name),
            (false, false) => format!("{} - {} ({})", self.code, self.name, self.city),
        }
    }
}

/// Normalize an airport code for keyed lookup.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Parse reference text into airport records sorted by code.
///
/// The first line is the header and is skipped, as are blank lines. Rows
/// whose ICAO field is empty or whitespace-only are dropped. Missing trailing
/// fields become empty strings. When a code repeats, the first row wins.
pub fn parse_airports(text: &str) -> Result<Vec<AirportRecord>> {
    let mut airports = Vec::new();
    let mut dropped = 0usize;
    let mut malformed = 0usize;

    for (index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields = match parse_row(line) {
            Ok(fields) => fields,
            Err(err) => {
                malformed += 1;
                warn!(line = index + 1, error = %err, "skipping malformed airport row");
                continue;
            }
        };
        let field = |index: usize| {
            fields
                .get(index)
                .map(|value| value.trim_matches('"').trim().to_string())
                .unwrap_or_default()
        };

        let icao = field(ICAO_FIELD);
        if icao.is_empty() {
            dropped += 1;
            continue;
        }

        airports.push(AirportRecord::new(
            icao,
            field(NAME_FIELD),
            field(CITY_FIELD),
            field(COUNTRY_FIELD),
        ));
    }

    // Stable sort keeps the first occurrence ahead of later duplicates.
    airports.sort_by(|a, b| a.code.cmp(&b.code));
    let before_dedup = airports.len();
    airports.dedup_by(|later, earlier| later.code == earlier.code);

    debug!(
        parsed = airports.len(),
        dropped_without_icao = dropped,
        malformed,
        duplicates = before_dedup - airports.len(),
        "parsed airport reference data"
    );

    Ok(airports)
}

/// Split a single row into trimmed fields.
fn parse_row(line: &str) -> Result<Vec<String>> {
    let line = strip_space_before_quotes(line);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record.iter().map(str::to_string).collect())
}

/// Remove whitespace between a delimiter and an opening quote, so
/// `JFK, "Kennedy, John F"` is read as a quoted field.
fn strip_space_before_quotes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_quotes = false;
    let mut field_start = true;
    let mut pending = String::new();

    for ch in line.chars() {
        if field_start && !in_quotes && ch.is_whitespace() {
            pending.push(ch);
            continue;
        }
        if field_start && ch != '"' {
            out.push_str(&pending);
        }
        pending.clear();
        field_start = false;

        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => field_start = true,
            _ => {}
        }
        out.push(ch);
    }
    out.push_str(&pending);
    out
}
