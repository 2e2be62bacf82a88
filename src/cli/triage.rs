//! Triage command handler.
//!
//! Implements the `triage` subcommand: load a Grype report and browse it.

use crate::config::{TriageConfig, TuiConfig, Validatable};
use crate::error::TriageError;
use crate::model::{Match, MatchStore, Severity};
use crate::parsers::parse_grype_file;
use crate::tui::{run_tui, BrowserState, RenderConfig};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Run the triage command
#[allow(clippy::needless_pass_by_value)]
pub fn run_triage(config: TriageConfig) -> Result<i32> {
    validate_settings(&config.tui)?;

    let normalized = parse_grype_file(&config.report_path)?;
    if let Some(distro) = &normalized.distro {
        tracing::debug!("report target identified as {distro}");
    }

    let store = Arc::new(MatchStore::from(normalized));
    tracing::info!(
        "Loaded {} matches from {} ({})",
        store.len(),
        config.report_path.display(),
        severity_summary(&store)
    );

    let state = BrowserState::new(store, RenderConfig::from_tui_config(&config.tui))
        .with_details(config.tui.show_details);
    let outcome = run_tui(state).context("terminal browser failed")?;

    if config.print_selection {
        if let Some(selected) = &outcome.selected {
            println!("{}", selection_json(selected)?);
        }
    }

    Ok(0)
}

/// Reject display settings the browser cannot render.
pub fn validate_settings(tui: &TuiConfig) -> crate::error::Result<()> {
    let errors = tui.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(TriageError::config(joined.join("; ")))
}

/// Severity counts, highest first, e.g. `2 Critical, 5 High`.
pub fn severity_summary(store: &MatchStore) -> String {
    let counts = store.severity_counts();
    let parts: Vec<String> = Severity::ALL
        .iter()
        .filter_map(|severity| {
            counts
                .get(severity)
                .map(|count| format!("{count} {severity}"))
        })
        .collect();

    if parts.is_empty() {
        "no matches".to_string()
    } else {
        parts.join(", ")
    }
}

fn selection_json(selected: &Match) -> Result<String> {
    serde_json::to_string_pretty(selected).context("failed to serialize selection")
}
