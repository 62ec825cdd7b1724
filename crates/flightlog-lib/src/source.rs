//! Injectable sources for airport reference text.
//!
//! The directory never reads files or the network itself; it asks an
//! [`AirportSource`] for the raw text. This keeps parsing and search identical
//! whether the data comes from disk, the binary, or an HTTP endpoint.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for a user-provided airport reference file.
const AIRPORTS_FILENAME: &str = "airports.csv";

/// Environment variable naming a local airport reference file.
pub const AIRPORTS_PATH_ENV: &str = "FLIGHTLOG_AIRPORTS_PATH";

/// Environment variable naming a URL serving the airport reference file.
pub const AIRPORTS_URL_ENV: &str = "FLIGHTLOG_AIRPORTS_URL";

/// Environment variable overriding the HTTP fetch timeout in seconds.
pub const HTTP_TIMEOUT_ENV: &str = "FLIGHTLOG_HTTP_TIMEOUT_SECS";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Reference data compiled into the binary.
const EMBEDDED_AIRPORTS: &str = include_str!("../data/airports.csv");

/// Provider of raw airport reference text.
pub trait AirportSource: Send + Sync + fmt::Debug {
    /// Read the complete reference text.
    fn read(&self) -> Result<String>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Reads a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AirportSource for FileSource {
    fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(Error::AirportSourceMissing {
                path: self.path.clone(),
            });
        }
        Ok(fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// The dataset bundled with the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl AirportSource for EmbeddedSource {
    fn read(&self) -> Result<String> {
        Ok(EMBEDDED_AIRPORTS.to_string())
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// In-memory text, mainly for fixtures and tests.
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl AirportSource for TextSource {
    fn read(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("text:{} bytes", self.text.len())
    }
}

/// Fetches the reference file over HTTP with a blocking client.
///
/// Must not be read from inside an async runtime worker; services load it on a
/// blocking task.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AirportSource for HttpSource {
    fn read(&self) -> Result<String> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent())
            .build()
            .map_err(Error::Http)?;
        debug!(url = %self.url, "fetching airport reference data");
        let response = client.get(&self.url).send()?.error_for_status()?;
        Ok(response.text()?)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}

fn user_agent() -> String {
    format!("flightlog-lib/{}", env!("CARGO_PKG_VERSION"))
}

/// Options controlling which [`AirportSource`] is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceOptions {
    /// Explicit local file; takes precedence over everything else.
    pub path: Option<PathBuf>,
    /// URL to fetch when no path is given.
    pub url: Option<String>,
    /// Transport timeout for the HTTP source.
    pub timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            path: None,
            url: None,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl SourceOptions {
    /// Read options from `FLIGHTLOG_AIRPORTS_PATH`, `FLIGHTLOG_AIRPORTS_URL` and
    /// `FLIGHTLOG_HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let path = env::var_os(AIRPORTS_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let url = env::var(AIRPORTS_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        let timeout = env::var(HTTP_TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT);

        Self { path, url, timeout }
    }

    /// Override the local file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Select a source: explicit path, then URL, then a file in the per-user data
/// directory, then the embedded dataset.
pub fn resolve_source(options: &SourceOptions) -> Result<Box<dyn AirportSource>> {
    if let Some(path) = &options.path {
        if !path.exists() {
            return Err(Error::AirportSourceMissing { path: path.clone() });
        }
        return Ok(Box::new(FileSource::new(path)));
    }

    if let Some(url) = &options.url {
        return Ok(Box::new(
            HttpSource::new(url.clone()).with_timeout(options.timeout),
        ));
    }

    if let Ok(path) = default_airports_path() {
        if path.exists() {
            debug!(path = %path.display(), "using airport data from user data directory");
            return Ok(Box::new(FileSource::new(path)));
        }
    }

    Ok(Box::new(EmbeddedSource))
}

/// Resolve the default airport file location using platform-specific project directories.
pub fn default_airports_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "flightlog", "flightlog").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(AIRPORTS_FILENAME))
}
