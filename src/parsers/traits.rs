//! Parser trait definitions.

use crate::error::{ErrorContext, Result, TriageError};
use crate::model::Normalized;
use std::path::Path;

/// Maximum report file size (512 MB).
pub const MAX_REPORT_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// A scanner-specific report parser.
pub trait ReportParser {
    /// Parse a report from a file path.
    ///
    /// Files larger than [`MAX_REPORT_FILE_SIZE`] are rejected before reading.
    fn parse(&self, path: &Path) -> Result<Normalized> {
        let metadata = std::fs::metadata(path).map_err(|e| TriageError::io(path, e))?;
        if metadata.len() > MAX_REPORT_FILE_SIZE {
            return Err(TriageError::validation(format!(
                "report is {} MB, exceeding the {} MB limit",
                metadata.len() / (1024 * 1024),
                MAX_REPORT_FILE_SIZE / (1024 * 1024),
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| TriageError::io(path, e))?;
        self.parse_str(&content)
            .with_context(|| format!("reading {} {}", self.format_name(), path.display()))
    }

    /// Parse a report from string content
    fn parse_str(&self, content: &str) -> Result<Normalized>;

    /// Get format name
    fn format_name(&self) -> &str;
}
