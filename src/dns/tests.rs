//! DNS module tests.

use super::*;
use crate::error_handling::NetworkError;
use crate::geoip::{GeolocationService, GeolocationStatus};
use serde_json::{json, Value};
use std::sync::Arc;
use strum::IntoEnumIterator;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn doh_body(answers: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "Status": 0, "Answer": answers }))
}

/// Mounts a DNS-over-HTTPS answer for `example.com` and one record type.
async fn mount_answer(server: &MockServer, record_type: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("name", "example.com"))
        .and(query_param("type", record_type))
        .and(header("accept", "application/dns-json"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_typical_records(server: &MockServer) {
    mount_answer(
        server,
        "A",
        doh_body(json!([
            { "name": "example.com.", "type": 5, "TTL": 300, "data": "edge.example.net." },
            { "name": "edge.example.net.", "type": 1, "TTL": 300, "data": "93.184.216.34" },
            { "name": "edge.example.net.", "type": 1, "TTL": 300, "data": "93.184.216.35" }
        ])),
    )
    .await;
    mount_answer(
        server,
        "AAAA",
        doh_body(json!([
            { "name": "example.com.", "type": 28, "TTL": 300, "data": "2606:2800:220:1:248:1893:25c8:1946" }
        ])),
    )
    .await;
    mount_answer(
        server,
        "MX",
        doh_body(json!([
            { "name": "example.com.", "type": 15, "TTL": 300, "data": "10 mail.example.com." },
            { "name": "example.com.", "type": 15, "TTL": 300, "data": "20 mail2.example.com." }
        ])),
    )
    .await;
    mount_answer(
        server,
        "TXT",
        doh_body(json!([
            { "name": "example.com.", "type": 16, "TTL": 300, "data": "\"v=spf1 include:_spf.google.com ~all\"" }
        ])),
    )
    .await;
}

fn test_resolver(dns: &MockServer, geo: &MockServer) -> Resolver {
    let client = Arc::new(reqwest::Client::new());
    Resolver::new(
        DnsService::new(Arc::clone(&client), format!("{}/resolve", dns.uri())),
        GeolocationService::new(client, geo.uri()),
    )
}

fn domain() -> DomainName {
    DomainName::parse("example.com").unwrap()
}

#[test]
fn test_parse_mx_strips_trailing_dot() {
    let mx = parse_mx_data("10 mail.example.com.").unwrap();
    assert_eq!(mx.priority, 10);
    assert_eq!(mx.exchange, "mail.example.com");
}

#[test]
fn test_parse_mx_strips_only_one_dot() {
    let mx = parse_mx_data("5 mx.example.com..").unwrap();
    assert_eq!(mx.exchange, "mx.example.com.");

    let mx = parse_mx_data("0 .").unwrap();
    assert_eq!(mx.priority, 0);
    assert_eq!(mx.exchange, "");
}

#[test]
fn test_parse_mx_tolerates_repeated_spaces() {
    let mx = parse_mx_data("10  mx.example.com.").unwrap();
    assert_eq!(mx.priority, 10);
    assert_eq!(mx.exchange, "mx.example.com");
}

#[test]
fn test_parse_mx_rejects_malformed_payloads() {
    assert!(parse_mx_data("mail.example.com.").is_none());
    assert!(parse_mx_data("ten mail.example.com.").is_none());
    assert!(parse_mx_data("").is_none());
}

#[test]
fn test_strip_txt_quotes_removes_every_quote() {
    assert_eq!(strip_txt_quotes("\"v=spf1 -all\""), "v=spf1 -all");
    assert_eq!(strip_txt_quotes("\"part one\" \"part two\""), "part one part two");
    assert_eq!(strip_txt_quotes("unquoted"), "unquoted");
}

#[test]
fn test_answers_of_type_drops_unrelated_entries() {
    let response: DohResponse = serde_json::from_value(json!({
        "Status": 0,
        "Answer": [
            { "type": 5, "data": "alias.example.net." },
            { "type": 1, "data": "192.0.2.1" },
            { "type": 28, "data": "2001:db8::1" }
        ]
    }))
    .unwrap();
    let a: Vec<&str> = answers_of_type(&response, RecordType::A).collect();
    assert_eq!(a, vec!["192.0.2.1"]);
    let aaaa: Vec<&str> = answers_of_type(&response, RecordType::Aaaa).collect();
    assert_eq!(aaaa, vec!["2001:db8::1"]);
    assert_eq!(answers_of_type(&response, RecordType::Txt).count(), 0);
}

#[test]
fn test_response_without_answer_section() {
    let response: DohResponse = serde_json::from_str(r#"{"Status": 3}"#).unwrap();
    assert_eq!(response.status, 3);
    assert!(response.answer.is_empty());
}

#[test]
fn test_record_type_codes_and_mnemonics() {
    let all: Vec<(u16, &str)> = RecordType::iter()
        .map(|rt| (rt.code(), rt.mnemonic()))
        .collect();
    assert_eq!(all, vec![(1, "A"), (28, "AAAA"), (15, "MX"), (16, "TXT")]);
    assert_eq!(RecordType::Mx.to_string(), "MX");
}

#[test]
fn test_domain_name_parse_trims() {
    assert_eq!(
        DomainName::parse("  example.com \n").unwrap().as_str(),
        "example.com"
    );
    assert!(DomainName::parse("").is_none());
    assert!(DomainName::parse("   \t").is_none());
}

#[test]
fn test_resolution_result_json_field_names() {
    let value = serde_json::to_value(ResolutionResult::default()).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["addressesV4", "addressesV6", "mailExchanges", "textRecords"]
    );
}

#[tokio::test]
async fn test_resolve_collects_all_records_and_location() {
    let dns = MockServer::start().await;
    let geo = MockServer::start().await;
    mount_typical_records(&dns).await;
    Mock::given(method("GET"))
        .and(path("/93.184.216.34/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "93.184.216.34",
            "city": "Norwell",
            "country_name": "United States",
            "latitude": 42.1508,
            "longitude": -70.8228
        })))
        .expect(1)
        .mount(&geo)
        .await;

    let outcome = test_resolver(&dns, &geo)
        .resolve(&domain())
        .await
        .expect("scan should succeed");

    let result = &outcome.result;
    assert_eq!(result.addresses_v4, vec!["93.184.216.34", "93.184.216.35"]);
    assert_eq!(
        result.addresses_v6,
        vec!["2606:2800:220:1:248:1893:25c8:1946"]
    );
    assert_eq!(
        result.mail_exchanges,
        vec![
            MxRecord {
                exchange: "mail.example.com".to_string(),
                priority: 10
            },
            MxRecord {
                exchange: "mail2.example.com".to_string(),
                priority: 20
            },
        ]
    );
    assert_eq!(
        result.text_records,
        vec!["v=spf1 include:_spf.google.com ~all"]
    );

    let location = result.location.as_ref().expect("location should be set");
    assert_eq!(location.city, "Norwell");
    assert_eq!(location.country, "United States");
    assert_eq!(location.address, "93.184.216.34");
    assert_eq!(location.latitude, 42.1508);
    assert_eq!(outcome.geolocation, GeolocationStatus::Located);
    assert_eq!(outcome.domain.as_str(), "example.com");
}

#[tokio::test]
async fn test_resolve_fails_when_any_lookup_fails() {
    let dns = MockServer::start().await;
    let geo = MockServer::start().await;
    mount_answer(&dns, "A", doh_body(json!([{ "type": 1, "data": "192.0.2.1" }]))).await;
    mount_answer(&dns, "AAAA", ResponseTemplate::new(503)).await;
    mount_answer(&dns, "MX", doh_body(json!([]))).await;
    mount_answer(&dns, "TXT", doh_body(json!([]))).await;

    let err = test_resolver(&dns, &geo)
        .resolve(&domain())
        .await
        .expect_err("a failed AAAA lookup must abort the scan");

    match err {
        NetworkError::Status {
            record_type,
            status,
            ..
        } => {
            assert_eq!(record_type, RecordType::Aaaa);
            assert_eq!(status, 503);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_fails_on_malformed_json() {
    let dns = MockServer::start().await;
    let geo = MockServer::start().await;
    mount_answer(&dns, "A", doh_body(json!([]))).await;
    mount_answer(&dns, "AAAA", doh_body(json!([]))).await;
    mount_answer(&dns, "MX", doh_body(json!([]))).await;
    mount_answer(
        &dns,
        "TXT",
        ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
    )
    .await;

    let err = test_resolver(&dns, &geo)
        .resolve(&domain())
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Decode { .. }));
    assert_eq!(err.record_type(), RecordType::Txt);
}

#[tokio::test]
async fn test_resolve_fails_when_service_unreachable() {
    let geo = MockServer::start().await;
    let client = Arc::new(reqwest::Client::new());
    let closed_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let resolver = Resolver::new(
        DnsService::new(
            Arc::clone(&client),
            format!("http://127.0.0.1:{closed_port}/resolve"),
        ),
        GeolocationService::new(client, geo.uri()),
    );
    let err = resolver.resolve(&domain()).await.unwrap_err();
    assert!(matches!(err, NetworkError::Transport { .. }));
}

#[tokio::test]
async fn test_resolve_skips_geolocation_without_ipv4() {
    let dns = MockServer::start().await;
    let geo = MockServer::start().await;
    mount_answer(&dns, "A", doh_body(json!([]))).await;
    mount_answer(
        &dns,
        "AAAA",
        doh_body(json!([{ "type": 28, "data": "2001:db8::1" }])),
    )
    .await;
    mount_answer(&dns, "MX", doh_body(json!([]))).await;
    mount_answer(&dns, "TXT", doh_body(json!([]))).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&geo)
        .await;

    let outcome = test_resolver(&dns, &geo).resolve(&domain()).await.unwrap();
    assert!(outcome.result.addresses_v4.is_empty());
    assert_eq!(outcome.result.addresses_v6, vec!["2001:db8::1"]);
    assert!(outcome.result.location.is_none());
    assert_eq!(outcome.geolocation, GeolocationStatus::Skipped);
}

#[tokio::test]
async fn test_resolve_swallows_geolocation_failure() {
    let dns = MockServer::start().await;
    let geo = MockServer::start().await;
    mount_typical_records(&dns).await;
    Mock::given(method("GET"))
        .and(path("/93.184.216.34/json/"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&geo)
        .await;

    let outcome = test_resolver(&dns, &geo)
        .resolve(&domain())
        .await
        .expect("geolocation failure must not fail the scan");
    assert_eq!(outcome.result.addresses_v4.len(), 2);
    assert_eq!(outcome.result.mail_exchanges.len(), 2);
    assert!(outcome.result.location.is_none());
    match outcome.geolocation {
        GeolocationStatus::Failed(reason) => assert!(reason.contains("429")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_nxdomain_yields_empty_records() {
    let dns = MockServer::start().await;
    let geo = MockServer::start().await;
    for record_type in ["A", "AAAA", "MX", "TXT"] {
        mount_answer(
            &dns,
            record_type,
            ResponseTemplate::new(200).set_body_json(json!({ "Status": 3 })),
        )
        .await;
    }

    let outcome = test_resolver(&dns, &geo).resolve(&domain()).await.unwrap();
    assert_eq!(outcome.result, ResolutionResult::default());
    assert_eq!(outcome.result.record_count(), 0);
    assert_eq!(outcome.geolocation, GeolocationStatus::Skipped);
}
