//! DNS resolution and record querying.
//!
//! This module provides async DNS operations over DNS-over-HTTPS (JSON):
//! - IP address resolution (A/AAAA records)
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records)
//! - The combined scan that also geolocates the first IPv4 address

mod extract;
mod records;
mod resolution;
mod types;

// Re-export public API
pub use extract::{answers_of_type, parse_mx_data, strip_txt_quotes};
pub use records::{lookup_address_records, lookup_mx_records, lookup_txt_records, DnsService};
pub use resolution::{Resolver, ScanOutcome};
pub use types::{DohAnswer, DohResponse, DomainName, MxRecord, RecordType, ResolutionResult};

#[cfg(test)]
mod tests;
