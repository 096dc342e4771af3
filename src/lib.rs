//! osint_panel library: domain reconnaissance and search dork composition
//!
//! This library resolves a domain's A, AAAA, MX and TXT records over
//! DNS-over-HTTPS, geolocates its first IPv4 address, exports the result as
//! JSON or CSV, and composes search-engine "dork" queries either field by
//! field or from a catalogue of reconnaissance templates.
//!
//! # Example
//!
//! ```no_run
//! use osint_panel::initialization::init_resolver;
//! use osint_panel::{Config, DomainName};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver(&Config::default())?;
//! let domain = DomainName::parse("example.com").ok_or("blank domain")?;
//!
//! let outcome = resolver.resolve(&domain).await?;
//! println!("{} IPv4 addresses", outcome.result.addresses_v4.len());
//!
//! let dorks = osint_panel::generate_from_category("Admin Panels", "example.com")?;
//! println!("{}", dorks[0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Resolution requires a Tokio runtime. Dork composition and export are
//! synchronous and pure.

pub mod app;
pub mod config;
pub mod dns;
pub mod dork;
pub mod error_handling;
pub mod export;
pub mod geoip;
pub mod initialization;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{DomainName, MxRecord, ResolutionResult, Resolver, ScanOutcome};
pub use dork::{
    categories, compose_preview, generate, generate_from_category, operators, search_url,
    DorkCategory, DorkField, DorkFields,
};
pub use error_handling::{GeolocationError, InvalidSelectionError, NetworkError};
pub use export::{export_csv, export_json, import_json, ExportFormat};
pub use geoip::{GeolocationStatus, Location};
