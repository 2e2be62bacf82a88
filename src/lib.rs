//! **An interactive terminal browser for vulnerability scan matches.**
//!
//! `vex-triage` loads a Grype JSON report, normalizes it into a sorted list of
//! (package, vulnerability) matches and lets you scroll, page and search
//! through them, with an optional pane showing every field of the selected
//! match.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The normalized data model. A [`MatchStore`] is the
//!   immutable, sorted list every view reads from.
//! - **[`parsers`]**: Turns Grype JSON documents into the normalized model.
//! - **[`tui`]**: The browser itself. Its state is a pure value driven one
//!   event at a time through [`tui::step`], so the whole interaction can be
//!   replayed without a terminal.
//! - **[`config`]**: Optional `.vex-triage.yaml` configuration for the theme,
//!   column widths and the initial detail pane state.
//!
//! ## Getting Started
//!
//! ```
//! use std::sync::Arc;
//! use vex_triage::parse_grype_str;
//! use vex_triage::model::MatchStore;
//! use vex_triage::tui::{step, BrowserState, Event, Key, RenderConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = r#"{"matches": [
//!         {"artifact": {"name": "zlib", "version": "1.2.12"},
//!          "vulnerability": {"id": "CVE-2022-37434", "severity": "Critical"}}
//!     ]}"#;
//!     let store = Arc::new(MatchStore::from(parse_grype_str(report)?));
//!
//!     let state = BrowserState::new(store, RenderConfig::default());
//!     let result = step(state, &Event::Resize { width: 100, height: 10 });
//!     let result = step(result.state, &Event::Key(Key::Char('/')));
//!     assert_eq!(result.frame.lines.len(), 10);
//!
//!     println!("{}", result.frame.texts().join("\n"));
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `vex-triage` library crate. The binary wraps
//! it as `vex-triage triage <REPORT>`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: row counts and terminal sizes are bounded in practice
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Render functions are inherently long
    clippy::too_many_lines,
    // Variable names like `first`/`last` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, ColumnWidths, TriageConfig, TuiConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, FindError, Result, TriageError};
pub use model::{Match, MatchStore, Normalized, Package, Severity, Vulnerability};
pub use parsers::{parse_grype_file, parse_grype_str, GrypeParser, ReportParser};
pub use tui::{run_tui, step, BrowserState, Event, Frame, Key, Mode, Outcome, RenderConfig};
