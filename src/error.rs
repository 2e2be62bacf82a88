//! Unified error types for vex-triage.
//!
//! Loading a scan report and its configuration can fail in the usual ways;
//! the browser itself has exactly one recoverable condition, [`FindError`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vex-triage operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TriageError {
    /// Errors while reading a scan report
    #[error("Failed to parse scan report: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

/// Raised by the table's search operations when no row satisfies the expression.
///
/// Recoverable: callers keep their previous state and surface the miss to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FindError {
    #[error("no row matched expression {expression:?}")]
    NotFound { expression: String },
}

impl FindError {
    pub fn not_found(expression: impl Into<String>) -> Self {
        Self::NotFound {
            expression: expression.into(),
        }
    }

    /// The expression that failed to match.
    #[must_use]
    pub fn expression(&self) -> &str {
        match self {
            Self::NotFound { expression } => expression,
        }
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for vex-triage operations
pub type Result<T> = std::result::Result<T, TriageError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl TriageError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for TriageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TriageError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "unable to parse Grype JSON data",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context is chained rather than replaced, so the message shows the path
/// through the code: `"loading report: unable to parse Grype JSON data"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<TriageError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: TriageError, new_ctx: &str) -> TriageError {
    match err {
        TriageError::Parse {
            context: existing,
            source,
        } => TriageError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TriageError::Io {
            path,
            message,
            source,
        } => TriageError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        TriageError::Config(msg) => TriageError::Config(chain_context(new_ctx, &msg)),
        TriageError::Validation(msg) => TriageError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when there is no existing context.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
