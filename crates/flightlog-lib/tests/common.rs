use std::path::PathBuf;

use flightlog_lib::{AirportDirectory, FileSource};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_directory() -> AirportDirectory {
    AirportDirectory::new(FileSource::new(fixtures_dir().join("airports.csv")))
}
