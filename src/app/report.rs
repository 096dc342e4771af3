//! Human-readable rendering of scan results and dork lists.

use std::fmt::Write;

use colored::*;

use crate::dns::ScanOutcome;
use crate::dork::search_url;
use crate::geoip::GeolocationStatus;

fn section(out: &mut String, title: &str, count: usize) {
    let _ = writeln!(out, "{} ({count})", title.bold().cyan());
}

/// Renders a completed scan: geolocation first, then the four record sets.
pub fn format_scan_report(outcome: &ScanOutcome) -> String {
    let mut out = String::new();
    let result = &outcome.result;

    let _ = writeln!(out, "{}", format!("== {} ==", outcome.domain).bold());

    let _ = writeln!(out, "{}", "IP Geolocation".bold().cyan());
    match (&outcome.geolocation, &result.location) {
        (GeolocationStatus::Located, Some(location)) => {
            let _ = writeln!(out, "  IP: {}", location.address);
            let _ = writeln!(out, "  Location: {}, {}", location.city, location.country);
            let _ = writeln!(
                out,
                "  Coordinates: {:.4}, {:.4}",
                location.latitude, location.longitude
            );
        }
        (GeolocationStatus::Failed(reason), _) => {
            let _ = writeln!(out, "  unavailable: {reason}");
        }
        _ => {
            let _ = writeln!(out, "  no IPv4 address to locate");
        }
    }

    section(&mut out, "A Records", result.addresses_v4.len());
    for ip in &result.addresses_v4 {
        let _ = writeln!(out, "  {ip}");
    }
    section(&mut out, "AAAA Records", result.addresses_v6.len());
    for ip in &result.addresses_v6 {
        let _ = writeln!(out, "  {ip}");
    }
    section(&mut out, "MX Records", result.mail_exchanges.len());
    for mx in &result.mail_exchanges {
        let _ = writeln!(out, "  Priority: {}  Exchange: {}", mx.priority, mx.exchange);
    }
    section(&mut out, "TXT Records", result.text_records.len());
    for txt in &result.text_records {
        let _ = writeln!(out, "  {txt}");
    }

    out
}

/// Renders generated dorks one per line, optionally followed by their
/// search URL.
pub fn format_dorks(dorks: &[String], with_search_url: bool) -> String {
    let mut out = String::new();
    for dork in dorks {
        let _ = writeln!(out, "{dork}");
        if with_search_url {
            let _ = writeln!(out, "  {}", search_url(dork).dimmed());
        }
    }
    out
}

/// Renders the operator reference table.
pub fn format_operators(operators: &[(&str, &str)]) -> String {
    let width = operators
        .iter()
        .map(|(operator, _)| operator.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (operator, description) in operators {
        let _ = writeln!(out, "{operator:<width$}  {description}");
    }
    out
}
