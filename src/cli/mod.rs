//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.

mod triage;

pub use triage::{run_triage, severity_summary, validate_settings};

// Re-export config types used by handlers
pub use crate::config::TriageConfig;
