//! JSON export functionality.
//!
//! The JSON export is the full nested result (records plus location) and can
//! be read back with [`import_json`].

use anyhow::{Context, Result};

use crate::dns::ResolutionResult;

/// Renders `result` as pretty-printed JSON.
pub fn export_json(result: &ResolutionResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize scan result")
}

/// Parses a JSON export back into a result.
///
/// # Errors
///
/// Returns an error if `content` is not a JSON export of a scan result.
pub fn import_json(content: &str) -> Result<ResolutionResult> {
    serde_json::from_str(content).context("Failed to parse scan result JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::MxRecord;
    use crate::geoip::Location;

    #[test]
    fn test_json_round_trip_with_location() {
        let result = ResolutionResult {
            addresses_v4: vec!["93.184.216.34".to_string(), "93.184.216.35".to_string()],
            addresses_v6: vec![],
            mail_exchanges: vec![MxRecord {
                exchange: "mail.example.com".to_string(),
                priority: 10,
            }],
            text_records: vec!["v=spf1 include:_spf.google.com ~all".to_string()],
            location: Some(Location {
                latitude: 37.7749,
                longitude: -122.4194,
                city: "San Francisco".to_string(),
                country: "United States".to_string(),
                address: "93.184.216.34".to_string(),
            }),
        };
        let json = export_json(&result).unwrap();
        assert!(json.contains("\"addressesV4\""));
        assert!(json.contains("\"mailExchanges\""));
        assert_eq!(import_json(&json).unwrap(), result);
    }

    #[test]
    fn test_json_omits_absent_location() {
        let json = export_json(&ResolutionResult::default()).unwrap();
        assert!(!json.contains("location"));
        assert_eq!(import_json(&json).unwrap(), ResolutionResult::default());
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(import_json("[1, 2, 3]").is_err());
    }
}
