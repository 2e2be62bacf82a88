//! Match records: one package paired with one vulnerability.

use serde::{Deserialize, Serialize};

use super::Severity;

/// A normalized scan report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    /// Every match reported by the scanner, in report order
    pub matches: Vec<Match>,
    /// Distribution the scanned target was identified as, if any
    pub distro: Option<String>,
}

/// A single (package, vulnerability) pairing from a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub package: Package,
    pub vulnerability: Vulnerability,
}

/// The package side of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    /// Package type as reported by the scanner (e.g. `apk`, `npm`, `go-module`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the upstream/source package, empty when unknown
    pub origin_name: String,
    /// Paths the package was found at
    pub locations: Vec<String>,
}

/// The vulnerability side of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    pub severity: String,
    pub url: String,
    pub description: String,
}

impl Match {
    /// Create a match with only the identifying fields set.
    pub fn new(package_name: impl Into<String>, vulnerability_id: impl Into<String>) -> Self {
        Self {
            package: Package {
                name: package_name.into(),
                ..Package::default()
            },
            vulnerability: Vulnerability {
                id: vulnerability_id.into(),
                ..Vulnerability::default()
            },
        }
    }

    /// Identity used for ordering and search.
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (&self.package.name, &self.vulnerability.id)
    }

    /// Case-sensitive substring test against the package name and vulnerability id.
    ///
    /// An empty expression never matches, so a blank search cannot land on row 0.
    #[must_use]
    pub fn matches_expression(&self, expr: &str) -> bool {
        if expr.is_empty() {
            return false;
        }
        self.package.name.contains(expr) || self.vulnerability.id.contains(expr)
    }

    /// Parsed severity of the vulnerability.
    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.vulnerability.severity)
    }
}
