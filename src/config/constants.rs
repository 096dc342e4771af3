//! Configuration constants.
//!
//! This module defines the defaults used throughout the application,
//! including upstream service endpoints and export naming.

/// Default DNS-over-HTTPS JSON endpoint.
///
/// Queried as `<endpoint>?name=<domain>&type=<mnemonic>`. Any resolver that
/// speaks the `application/dns-json` dialect (Google, Cloudflare) works.
pub const DEFAULT_DNS_ENDPOINT: &str = "https://dns.google/resolve";

/// Default IP geolocation endpoint.
///
/// Queried as `<endpoint>/<ip>/json/`.
pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "https://ipapi.co";

/// Media type requested from the DNS-over-HTTPS service.
pub const DNS_JSON_MEDIA_TYPE: &str = "application/dns-json";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("osint_panel/", env!("CARGO_PKG_VERSION"));

/// Placeholder used by the geolocation service when a field is unknown.
pub const UNKNOWN_PLACE: &str = "Unknown";

/// Search engine URL used to build "search this dork" links.
pub const SEARCH_ENGINE_URL: &str = "https://www.google.com/search";

/// Suffix appended to the domain name when naming export files.
pub const EXPORT_FILE_SUFFIX: &str = "_analysis";

/// Message shown to the user when a scan fails.
pub const SCAN_FAILED_MESSAGE: &str = "Failed to analyze domain. Please try again.";
