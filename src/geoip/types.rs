//! GeoIP data structures.

use serde::{Deserialize, Serialize};

/// Approximate location of an IP address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
    /// The IP address that was located
    pub address: String,
}

/// Outcome of the geolocation enrichment step of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeolocationStatus {
    /// The first IPv4 address was located
    Located,
    /// No IPv4 address was resolved, so no lookup was made
    Skipped,
    /// The lookup failed; the reason is kept for display only
    Failed(String),
}

/// JSON body returned by the geolocation service.
///
/// On failure the service answers `{"error": true, "reason": "..."}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeoIpResponse {
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
    pub(crate) city: Option<String>,
    pub(crate) country_name: Option<String>,
    #[serde(default)]
    pub(crate) error: bool,
    pub(crate) reason: Option<String>,
}
