//! Structured logging for the airport services.
//!
//! JSON is the production format. Every JSON event carries the service name as
//! a top-level `service` field and the enclosing request span (with its
//! `request_id`) under `span`, so lines from several services can share one
//! sink and still be correlated. Text output is for local development.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: `json` (default) or `text` (`pretty` is accepted)
//! - `RUST_LOG`: filter directives (default: `info`)
//! - `SERVICE_NAME`: overrides the service name stamped on events

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{Format, Json, JsonFields, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{prelude::*, EnvFilter, Layer};

const DEFAULT_LEVEL: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl LogFormat {
    /// `text` or `pretty` select text output; anything else is JSON.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Fallback filter when `RUST_LOG` is unset or invalid.
    pub level: String,
    /// Name stamped on every JSON event.
    pub service: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            level: DEFAULT_LEVEL.to_string(),
            service: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            format: std::env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LEVEL.to_string()),
            service: std::env::var("SERVICE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Default service name; an explicit `SERVICE_NAME` wins.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        if self.service.is_none() {
            self.service = Some(service.into());
        }
        self
    }

    /// Filter from `RUST_LOG`, falling back to [`level`](Self::level).
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// JSON event format with a leading `"service"` field.
pub struct ServiceJsonFormat {
    inner: Format<Json>,
    /// Service name, already JSON-encoded.
    service: Option<String>,
}

impl ServiceJsonFormat {
    pub fn new(service: Option<&str>) -> Self {
        Self {
            inner: tracing_subscriber::fmt::format()
                .json()
                .with_current_span(true)
                .with_span_list(false),
            service: service.map(|name| serde_json::Value::from(name).to_string()),
        }
    }
}

impl<S, N> FormatEvent<S, N> for ServiceJsonFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'w> FormatFields<'w> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let Some(service) = &self.service else {
            return self.inner.format_event(ctx, writer, event);
        };

        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;
        match line.strip_prefix('{') {
            Some(rest) => write!(writer, "{{\"service\":{service},{rest}"),
            None => writer.write_str(&line),
        }
    }
}

/// JSON `fmt` layer stamped with `service`, writing to `writer`.
pub fn json_layer<S, W>(service: Option<&str>, writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .fmt_fields(JsonFields::new())
        .event_format(ServiceJsonFormat::new(service))
        .with_writer(writer)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(config.filter());

    let installed = match config.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
        LogFormat::Json => registry
            .with(json_layer(config.service.as_deref(), std::io::stdout))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::info!(format = ?config.format, "logging initialized");
    }
}
