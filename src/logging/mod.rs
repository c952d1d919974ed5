//! Tracing setup shared by the API server and the command-line screener.
//!
//! Production emits one JSON object per event for log shipping. Elsewhere the
//! output is human-readable. `LOG_FORMAT` (`json`, `pretty`, `compact`)
//! overrides the environment's choice and `RUST_LOG` overrides the filter.

use std::env;
use std::str::FromStr;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used in production when `RUST_LOG` is unset.
pub const PRODUCTION_DIRECTIVES: &str = "info";
/// Filter used outside production; per-ticker streak and screener decisions
/// are logged at debug.
pub const DEVELOPMENT_DIRECTIVES: &str = "info,flowscreen=debug";

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    pub fn for_environment(environment: &str) -> Self {
        if is_production(environment) {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    /// An explicit, recognised override wins; anything else falls back to
    /// the environment default.
    pub fn resolve(environment: &str, requested: Option<&str>) -> Self {
        requested
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| Self::for_environment(environment))
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Where log lines go. The CLI prints its report on stdout, so it logs to
/// stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

impl LogTarget {
    fn writer(self) -> BoxMakeWriter {
        match self {
            LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

pub fn default_directives(environment: &str) -> &'static str {
    if is_production(environment) {
        PRODUCTION_DIRECTIVES
    } else {
        DEVELOPMENT_DIRECTIVES
    }
}

/// Install the global subscriber for `environment` (see `config::get_environment`).
pub fn init_logging(environment: &str, target: LogTarget) {
    let format = LogFormat::resolve(environment, env::var("LOG_FORMAT").ok().as_deref());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));
    let registry = tracing_subscriber::registry().with(filter);
    let writer = target.writer();

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(true)
                    .with_writer(writer),
            )
            .init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .init(),
    }
}
