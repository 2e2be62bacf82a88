//! Scan report parsers.
//!
//! Scanner output is converted into the [`Normalized`] representation the
//! browser consumes. Grype JSON is the only format understood today.
//!
//! ```no_run
//! use vex_triage::parsers::parse_grype_file;
//! use std::path::Path;
//!
//! let normalized = parse_grype_file(Path::new("grype.json")).unwrap();
//! println!("{} matches", normalized.matches.len());
//! ```

mod grype;
mod traits;

pub use grype::GrypeParser;
pub use traits::{ReportParser, MAX_REPORT_FILE_SIZE};

use crate::error::Result;
use crate::model::Normalized;
use std::io::Read;
use std::path::Path;

/// Parse a Grype JSON report from a file.
///
/// Returns an error if the file exceeds [`MAX_REPORT_FILE_SIZE`].
pub fn parse_grype_file(path: &Path) -> Result<Normalized> {
    GrypeParser::new().parse(path)
}

/// Parse a Grype JSON report from string content.
pub fn parse_grype_str(content: &str) -> Result<Normalized> {
    GrypeParser::new().parse_str(content)
}

/// Parse a Grype JSON report from any reader.
pub fn parse_grype_reader(mut reader: impl Read) -> Result<Normalized> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_grype_str(&content)
}
