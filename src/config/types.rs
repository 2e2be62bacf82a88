//! Configuration types for vex-triage.

use super::defaults::{
    DEFAULT_WIDTH_PACKAGE, DEFAULT_WIDTH_SEVERITY, DEFAULT_WIDTH_TYPE, DEFAULT_WIDTH_VERSION,
    DEFAULT_WIDTH_VULNERABILITY,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Settings that can live in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// TUI appearance and startup behavior
    pub tui: TuiConfig,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Start with the detail pane open
    pub show_details: bool,
    /// Table column widths
    pub columns: ColumnWidths,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            show_details: false,
            columns: ColumnWidths::default(),
        }
    }
}

/// Fixed widths of the table columns, in terminal cells.
///
/// Widths only pad; content longer than its column is never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ColumnWidths {
    #[schemars(range(min = 1, max = 200))]
    pub package: u16,
    #[schemars(range(min = 1, max = 200))]
    pub version: u16,
    #[serde(rename = "type")]
    #[schemars(range(min = 1, max = 200))]
    pub kind: u16,
    #[schemars(range(min = 1, max = 200))]
    pub vulnerability: u16,
    #[schemars(range(min = 1, max = 200))]
    pub severity: u16,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            package: DEFAULT_WIDTH_PACKAGE,
            version: DEFAULT_WIDTH_VERSION,
            kind: DEFAULT_WIDTH_TYPE,
            vulnerability: DEFAULT_WIDTH_VULNERABILITY,
            severity: DEFAULT_WIDTH_SEVERITY,
        }
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for the `triage` command
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Grype JSON report to browse
    pub report_path: PathBuf,
    /// Effective TUI settings (file config merged with CLI flags)
    pub tui: TuiConfig,
    /// Print the final selection to stdout after the browser exits
    pub print_selection: bool,
}
