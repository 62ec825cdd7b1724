//! Flightlog CLI library.
//!
//! Terminal styling and output formatting used by the `flightlog-cli` binary.

pub mod output;
pub mod terminal;
