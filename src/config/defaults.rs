//! Default configuration values.

/// Default width of the package name column.
pub const DEFAULT_WIDTH_PACKAGE: u16 = 28;

/// Default width of the package version column.
pub const DEFAULT_WIDTH_VERSION: u16 = 24;

/// Default width of the package type column.
pub const DEFAULT_WIDTH_TYPE: u16 = 12;

/// Default width of the vulnerability id column.
pub const DEFAULT_WIDTH_VULNERABILITY: u16 = 20;

/// Default width of the severity column.
pub const DEFAULT_WIDTH_SEVERITY: u16 = 12;

/// Upper bound accepted for any single column width.
pub const MAX_COLUMN_WIDTH: u16 = 200;

/// Theme names understood by the TUI.
pub(crate) const KNOWN_THEMES: &[&str] = &["dark", "light", "high-contrast"];
