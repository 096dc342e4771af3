//! IP geolocation enrichment.
//!
//! Maps the first IPv4 address of a scan to an approximate city, country and
//! coordinates using an external HTTP service. The lookup is best effort:
//! the resolver logs failures and carries on without a location.

mod lookup;
mod types;

// Re-export public API
pub use lookup::GeolocationService;
pub use types::{GeolocationStatus, Location};
