//! Output formatting for CLI results.
//!
//! Every renderer writes to an injected [`Write`] so the text and JSON forms
//! can be checked without spawning the binary.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightlog_lib::{AirportRecord, CoordinateRecord, RoutePlot};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    count: usize,
    airports: &'a [&'a AirportRecord],
}

#[derive(Serialize)]
struct AircraftOutput<'a> {
    query: &'a str,
    count: usize,
    aircraft: &'a [&'static str],
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Render airport search results.
pub fn render_airports<W: Write>(
    out: &mut W,
    query: &str,
    airports: &[&AirportRecord],
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(
            out,
            &SearchOutput {
                query,
                count: airports.len(),
                airports,
            },
        );
    }

    if airports.is_empty() {
        return writeln!(out, "No airports match '{}'", query);
    }

    for airport in airports {
        let place = match (airport.city.is_empty(), airport.country.is_empty()) {
            (false, false) => format!(" ({}, {})", airport.city, airport.country),
            (false, true) => format!(" ({})", airport.city),
            (true, false) => format!(" ({})", airport.country),
            (true, true) => String::new(),
        };
        writeln!(
            out,
            "{}{:<4}{} {}{}{}{}",
            palette.white_bold,
            airport.code,
            palette.reset,
            airport.name,
            palette.gray,
            place,
            palette.reset
        )?;
    }
    writeln!(out, "\n{} airport(s)", airports.len())
}

/// Render a resolved coordinate.
pub fn render_coordinates<W: Write>(
    out: &mut W,
    record: &CoordinateRecord,
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, record),
        OutputFormat::Text => writeln!(
            out,
            "{}{}{}: {}{:.4}, {:.4}{}",
            palette.white_bold,
            record.code,
            palette.reset,
            palette.cyan,
            record.coordinates.lat,
            record.coordinates.lng,
            palette.reset
        ),
    }
}

/// Render a route plot summary.
pub fn render_route<W: Write>(
    out: &mut W,
    plot: &RoutePlot,
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, plot);
    }

    writeln!(
        out,
        "Route from {}{}{} to {}{}{}:",
        palette.white_bold,
        plot.departure.code,
        palette.reset,
        palette.white_bold,
        plot.arrival.code,
        palette.reset
    )?;
    writeln!(
        out,
        "  Distance: {}{:.0} nm{}",
        palette.green, plot.distance_nm, palette.reset
    )?;
    writeln!(out, "  Initial bearing: {:03.0}°", plot.initial_bearing_deg)?;
    writeln!(
        out,
        "  Center: {:.4}, {:.4}",
        plot.center.lat, plot.center.lng
    )
}

/// Render aircraft catalog matches.
pub fn render_aircraft<W: Write>(
    out: &mut W,
    query: &str,
    aircraft: &[&'static str],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(
            out,
            &AircraftOutput {
                query,
                count: aircraft.len(),
                aircraft,
            },
        );
    }

    if aircraft.is_empty() {
        return writeln!(out, "No aircraft match '{}'", query);
    }
    for name in aircraft {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightlog_lib::{CoordinateTable, Coordinates};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    fn kjfk() -> AirportRecord {
        AirportRecord::new("KJFK", "John F Kennedy Intl", "New York", "United States")
    }

    #[test]
    fn airports_text() {
        let airport = kjfk();
        let text = render(|out| {
            render_airports(out, "jfk", &[&airport], OutputFormat::Text, ColorPalette::plain())
        });
        assert!(text.contains("KJFK John F Kennedy Intl (New York, United States)"));
        assert!(text.contains("1 airport(s)"));
    }

    #[test]
    fn airports_text_empty() {
        let text = render(|out| {
            render_airports(out, "zzz", &[], OutputFormat::Text, ColorPalette::plain())
        });
        assert_eq!(text, "No airports match 'zzz'\n");
    }

    #[test]
    fn airports_json() {
        let airport = kjfk();
        let text = render(|out| {
            render_airports(out, "jfk", &[&airport], OutputFormat::Json, ColorPalette::plain())
        });
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["count"], 1);
        assert_eq!(value["airports"][0]["code"], "KJFK");
    }

    #[test]
    fn coordinates_text_and_json() {
        let record = CoordinateRecord {
            code: "KJFK".to_string(),
            coordinates: Coordinates::new(40.6413, -73.7781),
        };
        let text = render(|out| {
            render_coordinates(out, &record, OutputFormat::Text, ColorPalette::plain())
        });
        assert_eq!(text, "KJFK: 40.6413, -73.7781\n");

        let json = render(|out| {
            render_coordinates(out, &record, OutputFormat::Json, ColorPalette::plain())
        });
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["lat"].as_f64(), Some(40.6413));
    }

    #[test]
    fn route_text() {
        let table = CoordinateTable::from_entries([
            ("KJFK", Coordinates::new(40.6413, -73.7781)),
            ("EGLL", Coordinates::new(51.4700, -0.4543)),
        ]);
        let plot = RoutePlot::resolve(&table, "KJFK", "EGLL").expect("plots");
        let text =
            render(|out| render_route(out, &plot, OutputFormat::Text, ColorPalette::plain()));
        assert!(text.starts_with("Route from KJFK to EGLL:"));
        assert!(text.contains(" nm"));
        assert!(text.contains("Initial bearing: 051°"));
    }

    #[test]
    fn aircraft_text() {
        let text = render(|out| {
            render_aircraft(out, "hornet", &["F-18 Hornet"], OutputFormat::Text)
        });
        assert_eq!(text, "F-18 Hornet\n");
    }
}
