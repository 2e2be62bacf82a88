//! Configuration validation for vex-triage.

use super::defaults::{KNOWN_THEMES, MAX_COLUMN_WIDTH};
use super::types::{AppConfig, ColumnWidths, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.tui.validate()
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !KNOWN_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    KNOWN_THEMES.join(", ")
                ),
            });
        }
        errors.extend(self.columns.validate());
        errors
    }
}

impl Validatable for ColumnWidths {
    fn validate(&self) -> Vec<ConfigError> {
        [
            ("package", self.package),
            ("version", self.version),
            ("type", self.kind),
            ("vulnerability", self.vulnerability),
            ("severity", self.severity),
        ]
        .into_iter()
        .filter(|(_, width)| *width == 0 || *width > MAX_COLUMN_WIDTH)
        .map(|(name, width)| ConfigError {
            field: format!("tui.columns.{name}"),
            message: format!("Width must be between 1 and {MAX_COLUMN_WIDTH}, got {width}"),
        })
        .collect()
    }
}
