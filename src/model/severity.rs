//! Severity levels as reported by vulnerability scanners.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed severity of a vulnerability.
///
/// Scanners report severity as free text; anything unrecognized is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Unknown,
    Negligible,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Parse severity from string, case-insensitively.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" | "moderate" => Self::Medium,
            "low" => Self::Low,
            "negligible" | "none" => Self::Negligible,
            _ => Self::Unknown,
        }
    }

    /// All levels, most severe first.
    pub const ALL: [Self; 6] = [
        Self::Critical,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::Negligible,
        Self::Unknown,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Negligible => "Negligible",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_levels() {
        assert_eq!(Severity::parse("Critical"), Severity::Critical);
        assert_eq!(Severity::parse("HIGH"), Severity::High);
        assert_eq!(Severity::parse("moderate"), Severity::Medium);
        assert_eq!(Severity::parse(" low "), Severity::Low);
        assert_eq!(Severity::parse("Negligible"), Severity::Negligible);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Severity::parse(""), Severity::Unknown);
        assert_eq!(Severity::parse("urgent"), Severity::Unknown);
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Low > Severity::Negligible);
        assert!(Severity::Negligible > Severity::Unknown);
    }
}
