//! Error handling.
//!
//! Errors are split by how callers are expected to treat them:
//! - **NetworkError**: a primary lookup failed; the scan is aborted
//! - **GeolocationError**: enrichment failed; logged and swallowed
//! - **InvalidSelectionError**: the dork generator was misused; no output
//! - **InitializationError**: logger or HTTP client setup failed

mod types;

// Re-export public API
pub use types::{GeolocationError, InitializationError, InvalidSelectionError, NetworkError};
