//! Parser tests for vex-triage
//!
//! Loads the Grype fixtures from disk and checks the normalized model and the
//! sorted store built from it.

use std::path::Path;
use vex_triage::{
    model::{MatchStore, Severity},
    parsers::{parse_grype_file, parse_grype_str},
    TriageError,
};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

#[test]
fn test_parse_alpine_report() {
    let normalized = parse_grype_file(&fixture_path("grype/alpine.json"))
        .expect("Failed to parse Grype report");

    assert_eq!(normalized.matches.len(), 5);
    assert_eq!(normalized.distro.as_deref(), Some("alpine"));

    // report order is preserved before sorting
    assert_eq!(normalized.matches[0].package.name, "zlib");
    assert_eq!(normalized.matches[0].vulnerability.id, "CVE-2022-37434");
}

#[test]
fn test_store_is_sorted_by_package_then_vulnerability() {
    let normalized = parse_grype_file(&fixture_path("grype/alpine.json")).unwrap();
    let store = MatchStore::from(normalized);

    let keys: Vec<(&str, &str)> = store.iter().map(|m| m.key()).collect();
    assert_eq!(
        keys,
        vec![
            ("libcrypto1.1", "CVE-2022-2097"),
            ("libssl1.1", "CVE-2022-2097"),
            ("log4j-core", "GHSA-jfh8-c2jp-5v3q"),
            ("zlib", "CVE-2018-25032"),
            ("zlib", "CVE-2022-37434"),
        ]
    );
}

#[test]
fn test_upstream_becomes_origin() {
    let normalized = parse_grype_file(&fixture_path("grype/alpine.json")).unwrap();
    let libssl = normalized
        .matches
        .iter()
        .find(|m| m.package.name == "libssl1.1")
        .unwrap();
    assert_eq!(libssl.package.origin_name, "openssl");
}

#[test]
fn test_multiple_locations_kept_in_order() {
    let normalized = parse_grype_file(&fixture_path("grype/alpine.json")).unwrap();
    let log4j = normalized
        .matches
        .iter()
        .find(|m| m.package.name == "log4j-core")
        .unwrap();
    assert_eq!(
        log4j.package.locations,
        vec![
            "/app/lib/log4j-core-2.14.1.jar".to_string(),
            "/opt/legacy/log4j-core-2.14.1.jar".to_string(),
        ]
    );
}

#[test]
fn test_data_source_becomes_url() {
    let normalized = parse_grype_file(&fixture_path("grype/alpine.json")).unwrap();
    assert_eq!(
        normalized.matches[0].vulnerability.url,
        "https://nvd.nist.gov/vuln/detail/CVE-2022-37434"
    );
}

#[test]
fn test_severity_counts() {
    let store = MatchStore::from(parse_grype_file(&fixture_path("grype/alpine.json")).unwrap());
    let counts = store.severity_counts();

    assert_eq!(counts.get(&Severity::Critical), Some(&1));
    assert_eq!(counts.get(&Severity::High), Some(&2));
    assert_eq!(counts.get(&Severity::Medium), Some(&2));
    assert_eq!(counts.get(&Severity::Low), None);
}

#[test]
fn test_empty_report() {
    let normalized = parse_grype_file(&fixture_path("grype/empty.json")).unwrap();
    assert!(normalized.matches.is_empty());
    // an empty distro name means the target was not identified
    assert_eq!(normalized.distro, None);
    assert!(MatchStore::from(normalized).is_empty());
}

#[test]
fn test_missing_matches_field_is_empty() {
    // a scan that found nothing may omit the list entirely
    let normalized = parse_grype_file(&fixture_path("grype/no-matches-field.json")).unwrap();
    assert!(normalized.matches.is_empty());
    assert!(MatchStore::from(normalized).is_empty());
}

#[test]
fn test_truncated_report_mentions_path() {
    let err = parse_grype_file(&fixture_path("grype/truncated.json")).unwrap_err();
    match err {
        TriageError::Parse { context, .. } => {
            assert!(context.contains("truncated.json"), "context: {context}");
            assert!(context.contains("decoding report"), "context: {context}");
        }
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_file() {
    let err = parse_grype_file(&fixture_path("grype/does-not-exist.json")).unwrap_err();
    assert!(matches!(err, TriageError::Io { .. }));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let content = r#"{
        "matches": [{
            "artifact": {"name": "busybox", "version": "1.35.0-r13", "metadata": {"x": 1}},
            "vulnerability": {"id": "CVE-2022-30065", "cvss": [{"version": "3.1"}]},
            "relatedVulnerabilities": []
        }],
        "ignoredMatches": []
    }"#;
    let normalized = parse_grype_str(content).unwrap();
    assert_eq!(normalized.matches[0].package.version, "1.35.0-r13");
}
