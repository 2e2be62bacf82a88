//! Configuration module for vex-triage.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.vex-triage.yaml` file in your project root or `~/.config/vex-triage/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//!   show_details: true
//!   columns:
//!     package: 32
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_WIDTH_PACKAGE, DEFAULT_WIDTH_SEVERITY, DEFAULT_WIDTH_TYPE, DEFAULT_WIDTH_VERSION,
    DEFAULT_WIDTH_VULNERABILITY, MAX_COLUMN_WIDTH,
};
pub use types::{AppConfig, ColumnWidths, TriageConfig, TuiConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{discover_config_file, load_config_file, load_or_default, ConfigFileError};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.vex-triage.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
