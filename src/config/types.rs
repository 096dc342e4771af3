//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_DNS_ENDPOINT, DEFAULT_GEOLOCATION_ENDPOINT, DEFAULT_USER_AGENT,
};
use crate::dork::{DorkField, DorkFields};
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use osint_panel::Config;
///
/// let config = Config {
///     dns_endpoint: "https://cloudflare-dns.com/dns-query".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// DNS-over-HTTPS JSON endpoint
    pub dns_endpoint: String,

    /// IP geolocation endpoint
    pub geolocation_endpoint: String,

    /// Per-request timeout in seconds; `None` leaves requests unbounded
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            dns_endpoint: DEFAULT_DNS_ENDPOINT.to_string(),
            geolocation_endpoint: DEFAULT_GEOLOCATION_ENDPOINT.to_string(),
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what a valid value looks like
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks that the configuration can be used to build a resolver.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field: a zero timeout, or an endpoint that is
    /// not an absolute `http`/`https` URL.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0 (e.g. --timeout-seconds 10)".to_string(),
            });
        }
        validate_endpoint("dns_endpoint", &self.dns_endpoint)?;
        validate_endpoint("geolocation_endpoint", &self.geolocation_endpoint)?;
        Ok(())
    }
}

fn validate_endpoint(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigValidationError {
            field,
            message: format!(
                "scheme '{}' is not supported, expected an http:// or https:// URL",
                parsed.scheme()
            ),
        }),
        Err(e) => Err(ConfigValidationError {
            field,
            message: format!("'{value}' is not a valid URL ({e}), expected e.g. https://dns.google/resolve"),
        }),
    }
}

/// Command-line interface of the `osint_panel` binary.
///
/// The two subcommands mirror the two tools of the panel: `scan` is the
/// domain analyzer, `dork` the search operator builder.
#[derive(Debug, Parser)]
#[command(
    name = "osint_panel",
    version,
    about = "Domain DNS/geolocation analyzer and search-dork composer"
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, default_value = DEFAULT_DNS_ENDPOINT, global = true)]
    pub dns_endpoint: String,

    /// IP geolocation endpoint
    #[arg(long, default_value = DEFAULT_GEOLOCATION_ENDPOINT, global = true)]
    pub geolocation_endpoint: String,

    /// HTTP request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Builds the library configuration from the global options.
    pub fn config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            dns_endpoint: self.dns_endpoint.clone(),
            geolocation_endpoint: self.geolocation_endpoint.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve A, AAAA, MX and TXT records and geolocate the first IPv4 address
    Scan(ScanArgs),
    /// Build search-engine dorks
    #[command(subcommand)]
    Dork(DorkCommand),
}

/// Arguments of the `scan` subcommand.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Domain to analyze (e.g. example.com)
    pub domain: String,

    /// Export format(s) to write; may be repeated
    #[arg(long = "export", value_enum)]
    pub exports: Vec<ExportFormat>,

    /// Directory export files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Dork subcommands.
#[derive(Debug, Subcommand)]
pub enum DorkCommand {
    /// Compose a dork from individual operator fields
    Preview(PreviewArgs),
    /// Generate every dork of a catalogue category for a target
    Generate {
        /// Category name, e.g. "Admin Panels"
        category: String,
        /// Domain or keyword substituted into each template
        target: String,
        /// Also print the search URL for each dork
        #[arg(long)]
        search_url: bool,
    },
    /// List catalogue categories
    Categories,
    /// Show the operator reference
    Operators,
}

/// Operator fields of `dork preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Restrict to a site (site:)
    #[arg(long)]
    pub site: Option<String>,
    /// Phrase in the page title (intitle:)
    #[arg(long)]
    pub intitle: Option<String>,
    /// Term in the URL (inurl:)
    #[arg(long)]
    pub inurl: Option<String>,
    /// File extension (filetype:)
    #[arg(long)]
    pub filetype: Option<String>,
    /// Phrase in the page body (intext:)
    #[arg(long)]
    pub intext: Option<String>,
    /// Term to exclude (-term)
    #[arg(long)]
    pub exclude: Option<String>,
    /// Also print the search URL
    #[arg(long)]
    pub search_url: bool,
}

impl PreviewArgs {
    /// Collects the given options into a set of dork fields.
    pub fn to_fields(&self) -> DorkFields {
        let mut fields = DorkFields::default();
        let given = [
            (DorkField::Site, &self.site),
            (DorkField::Title, &self.intitle),
            (DorkField::Url, &self.inurl),
            (DorkField::Filetype, &self.filetype),
            (DorkField::Text, &self.intext),
            (DorkField::Exclusion, &self.exclude),
        ];
        for (field, value) in given {
            if let Some(value) = value {
                fields.set(field, value.clone());
            }
        }
        fields
    }
}
