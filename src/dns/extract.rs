//! DNS answer normalization.
//!
//! Turns the raw `Answer` section of a DNS-over-HTTPS response into plain
//! record values. Entries whose type code differs from the queried type
//! (CNAME chains, for example) are dropped.

use log::warn;

use super::types::{DohResponse, MxRecord, RecordType};

/// Iterates over the `data` payloads of answers matching `record_type`.
pub fn answers_of_type(
    response: &DohResponse,
    record_type: RecordType,
) -> impl Iterator<Item = &str> + '_ {
    let code = record_type.code();
    response
        .answer
        .iter()
        .filter(move |answer| answer.record_type == code)
        .map(|answer| answer.data.as_str())
}

/// Parses an MX payload of the form `"<priority> <exchange>"`.
///
/// The payload is split on the first space; extra leading spaces and one
/// trailing `.` are removed from the exchange host.
///
/// # Returns
///
/// `None` if there is no space or the priority is not an integer.
pub fn parse_mx_data(data: &str) -> Option<MxRecord> {
    let (priority, exchange) = data.split_once(' ')?;
    let priority = priority.parse::<u16>().ok()?;
    let exchange = exchange.trim_start();
    let exchange = exchange.strip_suffix('.').unwrap_or(exchange);
    Some(MxRecord {
        exchange: exchange.to_string(),
        priority,
    })
}

/// Removes every double quote from a TXT payload.
pub fn strip_txt_quotes(data: &str) -> String {
    data.replace('"', "")
}

/// Extracts A or AAAA addresses, in answer order.
pub fn extract_addresses(response: &DohResponse, record_type: RecordType) -> Vec<String> {
    answers_of_type(response, record_type)
        .map(str::to_string)
        .collect()
}

/// Extracts MX records, in answer order.
///
/// Malformed payloads are skipped with a warning.
pub fn extract_mx_records(response: &DohResponse) -> Vec<MxRecord> {
    answers_of_type(response, RecordType::Mx)
        .filter_map(|data| {
            let parsed = parse_mx_data(data);
            if parsed.is_none() {
                warn!("Skipping malformed MX payload: {data:?}");
            }
            parsed
        })
        .collect()
}

/// Extracts TXT records with their quotes removed, in answer order.
pub fn extract_txt_records(response: &DohResponse) -> Vec<String> {
    answers_of_type(response, RecordType::Txt)
        .map(strip_txt_quotes)
        .collect()
}
