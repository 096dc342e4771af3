//! DNS data structures.
//!
//! This module defines the record types queried, the normalized scan result
//! and the JSON document returned by DNS-over-HTTPS services.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::geoip::Location;

/// DNS record types queried by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
pub enum RecordType {
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "AAAA")]
    Aaaa,
    #[strum(serialize = "MX")]
    Mx,
    #[strum(serialize = "TXT")]
    Txt,
}

impl RecordType {
    /// Numeric resource-record type code as it appears in answers.
    pub const fn code(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::Aaaa => 28,
            RecordType::Mx => 15,
            RecordType::Txt => 16,
        }
    }

    /// Mnemonic sent as the `type` query parameter.
    pub fn mnemonic(self) -> &'static str {
        self.into()
    }

    /// Label used in the `Record Type` column of CSV exports.
    pub const fn export_label(self) -> &'static str {
        match self {
            RecordType::A => "A Record",
            RecordType::Aaaa => "AAAA Record",
            RecordType::Mx => "MX Record",
            RecordType::Txt => "TXT Record",
        }
    }
}

/// A domain name as typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    /// Trims `input`; returns `None` when nothing is left.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Mail exchanger record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxRecord {
    pub exchange: String,
    pub priority: u16,
}

/// Normalized result of one scan.
///
/// `location` is only ever set when `addresses_v4` is non-empty and the
/// geolocation lookup of its first element succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub addresses_v4: Vec<String>,
    pub addresses_v6: Vec<String>,
    pub mail_exchanges: Vec<MxRecord>,
    pub text_records: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl ResolutionResult {
    /// Total number of DNS records across the four record types.
    pub fn record_count(&self) -> usize {
        self.addresses_v4.len()
            + self.addresses_v6.len()
            + self.mail_exchanges.len()
            + self.text_records.len()
    }
}

/// JSON body of a DNS-over-HTTPS (`application/dns-json`) response.
///
/// Fields other than `Status` and `Answer` are ignored.
#[derive(Debug, Deserialize)]
pub struct DohResponse {
    /// DNS response code (0 = NOERROR, 3 = NXDOMAIN)
    #[serde(rename = "Status", default)]
    pub status: u32,
    #[serde(rename = "Answer", default)]
    pub answer: Vec<DohAnswer>,
}

/// One entry of the `Answer` section.
#[derive(Debug, Deserialize)]
pub struct DohAnswer {
    #[serde(rename = "type")]
    pub record_type: u16,
    pub data: String,
}
