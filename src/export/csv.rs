//! CSV export functionality.
//!
//! Flattens a scan result to one row per DNS record: A, then AAAA, MX and
//! TXT. Only MX rows carry a priority.

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

use crate::dns::{RecordType, ResolutionResult};

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 3] = ["Record Type", "Value", "Priority"];

/// Renders `result` as CSV.
///
/// Values containing commas or quotes are quoted, so each TXT record stays a
/// single field.
///
/// # Errors
///
/// Returns an error only if the in-memory writer fails.
pub fn export_csv(result: &ResolutionResult) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for ip in &result.addresses_v4 {
        writer.write_record([RecordType::A.export_label(), ip.as_str(), ""])?;
    }
    for ip in &result.addresses_v6 {
        writer.write_record([RecordType::Aaaa.export_label(), ip.as_str(), ""])?;
    }
    for mx in &result.mail_exchanges {
        let priority = mx.priority.to_string();
        writer.write_record([
            RecordType::Mx.export_label(),
            mx.exchange.as_str(),
            priority.as_str(),
        ])?;
    }
    for txt in &result.text_records {
        writer.write_record([RecordType::Txt.export_label(), txt.as_str(), ""])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV export is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::MxRecord;

    fn sample() -> ResolutionResult {
        ResolutionResult {
            addresses_v4: vec!["93.184.216.34".to_string()],
            addresses_v6: vec!["2606:2800:220:1:248:1893:25c8:1946".to_string()],
            mail_exchanges: vec![MxRecord {
                exchange: "mail.example.com".to_string(),
                priority: 10,
            }],
            text_records: vec!["v=spf1 -all".to_string()],
            location: None,
        }
    }

    #[test]
    fn test_csv_rows_in_record_order() {
        let csv = export_csv(&sample()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Record Type,Value,Priority",
                "A Record,93.184.216.34,",
                "AAAA Record,2606:2800:220:1:248:1893:25c8:1946,",
                "MX Record,mail.example.com,10",
                "TXT Record,v=spf1 -all,",
            ]
        );
    }

    #[test]
    fn test_empty_result_has_only_header() {
        let csv = export_csv(&ResolutionResult::default()).unwrap();
        assert_eq!(csv, "Record Type,Value,Priority\n");
    }

    #[test]
    fn test_txt_with_commas_stays_one_field() {
        let result = ResolutionResult {
            text_records: vec!["v=DMARC1; p=none; rua=mailto:a@example.com,b@example.com".to_string()],
            ..Default::default()
        };
        let csv = export_csv(&result).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(
            &rows[0][1],
            "v=DMARC1; p=none; rua=mailto:a@example.com,b@example.com"
        );
        assert_eq!(&rows[0][2], "");
    }
}
