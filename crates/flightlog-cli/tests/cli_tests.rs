//! Integration tests for the flightlog CLI.
//!
//! Tests verify:
//! - Directory search against the fixture file (text and JSON)
//! - Source selection via `--airports` and `FLIGHTLOG_AIRPORTS_PATH`
//! - Coordinate resolution and "did you mean" failures
//! - Route plotting and unplottable routes
//! - Aircraft catalog search

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/airports.csv")
        .canonicalize()
        .expect("fixture airports present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("flightlog-cli");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("FLIGHTLOG_AIRPORTS_PATH")
        .env_remove("FLIGHTLOG_AIRPORTS_URL");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command runs");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_search_by_name() {
    cli()
        .arg("--airports")
        .arg(fixture_path())
        .args(["search", "kennedy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KJFK John F Kennedy Intl"))
        .stdout(predicate::str::contains("1 airport(s)"));
}

#[test]
fn test_search_city_json() {
    let value = json_stdout(
        cli()
            .arg("--airports")
            .arg(fixture_path())
            .args(["--format", "json", "search", "new york"]),
    );
    assert_eq!(value["count"], 2);
    assert_eq!(value["airports"][0]["code"], "KJFK");
    assert_eq!(value["airports"][1]["code"], "KLGA");
}

#[test]
fn test_search_without_query_browses() {
    let value = json_stdout(
        cli()
            .arg("--airports")
            .arg(fixture_path())
            .args(["--format", "json", "search"]),
    );
    assert_eq!(value["count"], 5);
    assert_eq!(value["query"], "");
}

#[test]
fn test_search_uses_env_path() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("airports.csv");
    fs::write(
        &path,
        "IATA,ICAO,Airport name,Country,City,Information\nSEA,KSEA,Seattle-Tacoma Intl,United States,Seattle,\n",
    )
    .expect("write airports");

    cli()
        .env("FLIGHTLOG_AIRPORTS_PATH", &path)
        .args(["search", "tacoma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KSEA"));
}

#[test]
fn test_search_flag_overrides_env_path() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("airports.csv");
    fs::write(&path, "IATA,ICAO,Airport name,Country,City,Information\n").expect("write airports");

    cli()
        .env("FLIGHTLOG_AIRPORTS_PATH", &path)
        .arg("--airports")
        .arg(fixture_path())
        .args(["search", "lax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KLAX"));
}

#[test]
fn test_search_missing_explicit_file_fails() {
    let dir = tempdir().expect("create temp dir");
    cli()
        .arg("--airports")
        .arg(dir.path().join("absent.csv"))
        .args(["search", "jfk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("airport reference data not found"));
}

#[test]
fn test_search_embedded_dataset() {
    cli()
        .args(["search", "heathrow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EGLL"));
}

#[test]
fn test_resolve_known_code() {
    cli()
        .args(["resolve", " kjfk "])
        .assert()
        .success()
        .stdout(predicate::str::contains("KJFK: 40.6413, -73.7781"));
}

#[test]
fn test_resolve_json() {
    let value = json_stdout(cli().args(["--format", "json", "resolve", "EGLL"]));
    assert_eq!(value["code"], "EGLL");
    assert!(value["lat"].as_f64().is_some());
}

#[test]
fn test_resolve_unknown_code_suggests() {
    cli()
        .args(["resolve", "KJFX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no coordinates for airport code: KJFX"))
        .stderr(predicate::str::contains("KJFK"));
}

#[test]
fn test_route_text() {
    cli()
        .args(["route", "--from", "KJFK", "--to", "EGLL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route from KJFK to EGLL:"))
        .stdout(predicate::str::contains("Distance:"));
}

#[test]
fn test_route_json() {
    let value = json_stdout(cli().args(["--format", "json", "route", "--from", "klax", "--to", "kjfk"]));
    assert_eq!(value["departure"]["code"], "KLAX");
    assert_eq!(value["arrival"]["code"], "KJFK");
    assert!(value["distance_nm"].as_f64().unwrap_or_default() > 2000.0);
}

#[test]
fn test_route_unplottable() {
    cli()
        .args(["route", "--from", "KJFK", "--to", "ZZZZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot plot route"))
        .stderr(predicate::str::contains("ZZZZ"));
}

#[test]
fn test_aircraft_search() {
    cli()
        .args(["aircraft", "a320"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Airbus A320"))
        .stdout(predicate::str::contains("Airbus A320neo"));
}

#[test]
fn test_aircraft_no_match() {
    cli()
        .args(["aircraft", "concorde"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No aircraft match 'concorde'"));
}
