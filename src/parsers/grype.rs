//! Grype JSON report parser.
//!
//! Only the fields the browser shows are deserialized; everything else in the
//! report is ignored. Absent or `null` collections decode as empty.

use super::traits::ReportParser;
use crate::error::{ErrorContext, Result};
use crate::model::{Match, Normalized, Package, Vulnerability};
use serde::{Deserialize, Deserializer};

/// Parser for `grype -o json` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrypeParser;

impl GrypeParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportParser for GrypeParser {
    fn parse_str(&self, content: &str) -> Result<Normalized> {
        let document: GrypeDocument =
            serde_json::from_str(content).context("decoding report")?;

        let matches: Vec<Match> = document
            .matches
            .into_iter()
            .map(normalize_match)
            .collect();

        tracing::debug!("normalized {} Grype matches", matches.len());

        Ok(Normalized {
            matches,
            distro: document
                .distro
                .map(|d| d.name)
                .filter(|name| !name.is_empty()),
        })
    }

    fn format_name(&self) -> &str {
        "Grype JSON"
    }
}

// ============================================================================
// Grype document shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct GrypeDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    matches: Vec<GrypeMatch>,
    #[serde(default)]
    distro: Option<GrypeDistro>,
}

#[derive(Debug, Deserialize)]
struct GrypeDistro {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct GrypeMatch {
    #[serde(default, deserialize_with = "null_as_default")]
    artifact: GrypeArtifact,
    #[serde(default, deserialize_with = "null_as_default")]
    vulnerability: GrypeVulnerability,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GrypeArtifact {
    name: String,
    version: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(deserialize_with = "null_as_default")]
    locations: Vec<GrypeLocation>,
    #[serde(deserialize_with = "null_as_default")]
    upstreams: Vec<GrypeUpstream>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GrypeLocation {
    #[serde(alias = "realPath")]
    path: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GrypeUpstream {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GrypeVulnerability {
    id: String,
    severity: String,
    data_source: String,
    description: String,
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn normalize_match(m: GrypeMatch) -> Match {
    let origin_name = m
        .artifact
        .upstreams
        .into_iter()
        .next()
        .map(|u| u.name)
        .unwrap_or_default();

    Match {
        package: Package {
            name: m.artifact.name,
            version: m.artifact.version,
            kind: m.artifact.kind,
            origin_name,
            locations: m.artifact.locations.into_iter().map(|l| l.path).collect(),
        },
        vulnerability: Vulnerability {
            id: m.vulnerability.id,
            severity: m.vulnerability.severity,
            url: m.vulnerability.data_source,
            description: m.vulnerability.description,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "matches": [
            {
                "vulnerability": {
                    "id": "CVE-2022-37434",
                    "dataSource": "https://nvd.nist.gov/vuln/detail/CVE-2022-37434",
                    "severity": "Critical",
                    "description": "zlib through 1.2.12 has a heap-based buffer over-read",
                    "fix": {"versions": ["1.2.12-r2"], "state": "fixed"}
                },
                "artifact": {
                    "name": "zlib",
                    "version": "1.2.12-r1",
                    "type": "apk",
                    "locations": [
                        {"path": "/lib/apk/db/installed", "layerID": "sha256:abc"}
                    ],
                    "upstreams": [{"name": "zlib-src"}, {"name": "ignored"}]
                }
            }
        ],
        "distro": {"name": "alpine", "version": "3.16.0"}
    }"#;

    #[test]
    fn test_parse_full_match() {
        let normalized = GrypeParser::new().parse_str(REPORT).unwrap();

        assert_eq!(normalized.distro.as_deref(), Some("alpine"));
        assert_eq!(normalized.matches.len(), 1);

        let m = &normalized.matches[0];
        assert_eq!(m.package.name, "zlib");
        assert_eq!(m.package.version, "1.2.12-r1");
        assert_eq!(m.package.kind, "apk");
        assert_eq!(m.package.origin_name, "zlib-src");
        assert_eq!(m.package.locations, vec!["/lib/apk/db/installed".to_string()]);
        assert_eq!(m.vulnerability.id, "CVE-2022-37434");
        assert_eq!(m.vulnerability.severity, "Critical");
        assert_eq!(
            m.vulnerability.url,
            "https://nvd.nist.gov/vuln/detail/CVE-2022-37434"
        );
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let content = r#"{"matches": [{"artifact": {"name": "musl"}, "vulnerability": {"id": "CVE-1"}}]}"#;
        let normalized = GrypeParser::new().parse_str(content).unwrap();

        let m = &normalized.matches[0];
        assert_eq!(m.package.origin_name, "");
        assert!(m.package.locations.is_empty());
        assert_eq!(m.vulnerability.severity, "");
        assert_eq!(normalized.distro, None);
    }

    #[test]
    fn test_real_path_alias() {
        let content = r#"{"matches": [{"artifact": {"name": "a", "locations": [{"realPath": "/usr/lib/a"}]}, "vulnerability": {"id": "CVE-1"}}]}"#;
        let normalized = GrypeParser::new().parse_str(content).unwrap();
        assert_eq!(normalized.matches[0].package.locations, vec!["/usr/lib/a".to_string()]);
    }

    #[test]
    fn test_missing_matches_is_empty() {
        let normalized = GrypeParser::new()
            .parse_str(r#"{"distro": {"name": "alpine"}}"#)
            .unwrap();
        assert!(normalized.matches.is_empty());
        assert_eq!(normalized.distro.as_deref(), Some("alpine"));
    }

    #[test]
    fn test_null_collections_are_empty() {
        let content = r#"{"matches": [{"artifact": {"name": "a", "upstreams": null, "locations": null}, "vulnerability": {"id": "CVE-1"}}]}"#;
        let normalized = GrypeParser::new().parse_str(content).unwrap();

        let m = &normalized.matches[0];
        assert_eq!(m.package.name, "a");
        assert_eq!(m.package.origin_name, "");
        assert!(m.package.locations.is_empty());
    }

    #[test]
    fn test_null_matches_and_sections() {
        let parser = GrypeParser::new();
        assert!(parser.parse_str(r#"{"matches": null}"#).unwrap().matches.is_empty());

        let content = r#"{"matches": [{"artifact": null, "vulnerability": {"id": "CVE-1"}}]}"#;
        let normalized = parser.parse_str(content).unwrap();
        assert_eq!(normalized.matches[0].package.name, "");
        assert_eq!(normalized.matches[0].vulnerability.id, "CVE-1");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        use crate::error::TriageError;

        let err = GrypeParser::new().parse_str("{not json").unwrap_err();
        match err {
            TriageError::Parse { context, .. } => {
                assert!(context.contains("unable to parse Grype JSON data"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }
}
