//! Error handling for pdeps
//!
//! Two layers, mirroring how the CLI reports failures:
//!
//! - [`PdepsError`] is the strongly-typed error returned by library code.
//! - [`ErrorContext`] wraps a [`PdepsError`] with optional details and a
//!   suggestion, and knows how to print itself with terminal colors.
//!
//! [`user_friendly_error`] converts any [`anyhow::Error`] that reaches `main`
//! into an [`ErrorContext`], walking the cause chain to find the most specific
//! error it knows how to explain.
//!
//! Soft failures (an unsupported filter kind, a filter whose member list could
//! not be extracted) are logged through `tracing` and never become errors.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdepsError {
    /// The resolved-graph document does not exist.
    #[error("Resolved graph not found: {path}")]
    GraphNotFound {
        /// Path that was looked up
        path: String,
    },

    /// The resolved-graph document exists but could not be parsed.
    #[error("Failed to parse resolved graph {file}: {reason}")]
    GraphParseError {
        /// Document that failed to parse
        file: String,
        /// Parser message
        reason: String,
    },

    /// Invalid generation configuration, e.g. a blank artifact id.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Writing a generated POM failed.
    #[error("Failed to generate pom {path}: {reason}")]
    PomWriteError {
        /// Output file that could not be written
        path: String,
        /// Underlying I/O message
        reason: String,
    },

    /// Rendering the POM XML failed.
    #[error("Failed to render pom XML: {reason}")]
    XmlError {
        /// Writer message
        reason: String,
    },

    /// Anything else worth surfacing with a message.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// A [`PdepsError`] decorated with user-facing hints.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: PdepsError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no suggestion or details.
    #[must_use]
    pub const fn new(error: PdepsError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion, printed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details, printed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error reaching the CLI boundary into an [`ErrorContext`].
///
/// The cause chain is walked so that a [`PdepsError`] wrapped by
/// `anyhow::Context` still gets its tailored suggestion. The outermost
/// message is kept as details when it adds information.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let outer = error.to_string();

    for cause in error.chain() {
        if let Some(pdeps_error) = cause.downcast_ref::<PdepsError>() {
            let mut context = create_error_context(pdeps_error);
            if context.details.is_none() && outer != pdeps_error.to_string() {
                context.details = Some(outer);
            }
            return context;
        }

        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            let context = ErrorContext::new(PdepsError::Other {
                message: outer.clone(),
            })
            .with_details(io_error.to_string());
            return match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => context
                    .with_suggestion("Check write permissions on the target directory"),
                std::io::ErrorKind::NotFound => {
                    context.with_suggestion("Check that the path exists and is spelled correctly")
                }
                _ => context,
            };
        }
    }

    let details = error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>().join(": ");
    let context = ErrorContext::new(PdepsError::Other { message: outer });
    if details.is_empty() { context } else { context.with_details(details) }
}

fn create_error_context(error: &PdepsError) -> ErrorContext {
    match error {
        PdepsError::GraphNotFound { .. } => ErrorContext::new(error.clone())
            .with_suggestion(
                "Pass --graph <PATH> or export the resolved dependency graph to resolved-graph.toml",
            )
            .with_details("pdeps reads the resolved artifact set from a TOML or JSON document"),
        PdepsError::GraphParseError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check the document syntax and that every artifact has group-id, artifact-id, version and scope"),
        PdepsError::ConfigError { .. } => ErrorContext::new(error.clone()).with_suggestion(
            "Set the value with a command-line flag, a PDEPS_* variable or the [generate] table",
        ),
        PdepsError::PomWriteError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Check that the target directory is writable"),
        _ => ErrorContext::new(error.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let error = PdepsError::GraphNotFound {
            path: "resolved-graph.toml".to_string(),
        };
        assert_eq!(error.to_string(), "Resolved graph not found: resolved-graph.toml");
    }

    #[test]
    fn test_error_context_display_includes_hints() {
        let context = ErrorContext::new(PdepsError::ConfigError {
            message: "version is blank".to_string(),
        })
        .with_details("from [generate]")
        .with_suggestion("set --version");

        let rendered = context.to_string();
        assert!(rendered.contains("Configuration error: version is blank"));
        assert!(rendered.contains("Details: from [generate]"));
        assert!(rendered.contains("Suggestion: set --version"));
    }

    #[test]
    fn test_user_friendly_error_finds_wrapped_error() {
        let result: anyhow::Result<()> = Err(PdepsError::PomWriteError {
            path: "target/app-compile-compile.pom".to_string(),
            reason: "read-only file system".to_string(),
        })
        .context("Failed to generate pom");

        let context = user_friendly_error(result.unwrap_err());
        assert!(matches!(context.error, PdepsError::PomWriteError { .. }));
        assert!(context.suggestion.is_some());
        assert_eq!(context.details.as_deref(), Some("Failed to generate pom"));
    }

    #[test]
    fn test_user_friendly_error_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let context = user_friendly_error(anyhow::Error::new(io).context("writing pom"));
        assert!(matches!(context.error, PdepsError::Other { .. }));
        assert_eq!(context.details.as_deref(), Some("denied"));
        assert!(context.suggestion.unwrap().contains("permissions"));
    }

    #[test]
    fn test_user_friendly_error_generic() {
        let context = user_friendly_error(anyhow::anyhow!("something odd"));
        assert_eq!(context.error.to_string(), "something odd");
        assert!(context.details.is_none());
    }
}
