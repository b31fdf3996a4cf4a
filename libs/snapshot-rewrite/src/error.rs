//! # Error Types
//!
//! Errors surfaced by the pipeline entry points. The rewriter itself never
//! fails: nodes that do not match a rule are left as they are.
//!
//! ## Error Policy
//!
//! - NO partial output when a stage fails
//! - Parser failures propagate unmodified, with one diagnostic per error
//! - Emitter failures are surfaced instead of unwrapped

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::diagnostic::Diagnostic;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while rewriting or re-serializing a snapshot.
///
/// ## Example
///
/// ```rust
/// use snapshot_rewrite::{normalize_only, RewriteError};
///
/// match normalize_only("let = ;") {
///     Ok(text) => println!("{text}"),
///     Err(RewriteError::Parse { diagnostics }) => assert!(!diagnostics.is_empty()),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum RewriteError {
    /// The input is not a syntactically valid module.
    #[error("Parse error: {}", first_message(.diagnostics))]
    Parse {
        /// Every error reported by the parser, in source order.
        diagnostics: Vec<Diagnostic>,
    },

    /// The code generator failed to write its output.
    #[error("Code generation failed: {0}")]
    Codegen(#[from] std::io::Error),

    /// The code generator produced bytes that are not UTF-8.
    #[error("Generated text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

impl RewriteError {
    /// Returns the parser diagnostics, or an empty slice for other errors.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            RewriteError::Parse { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}

fn first_message(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => "unknown syntax error".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for pipeline operations.
pub type RewriteResult<T> = Result<T, RewriteError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    /// Test parse error display uses the first diagnostic.
    #[test]
    fn test_parse_error_display() {
        let err = RewriteError::Parse {
            diagnostics: vec![
                Diagnostic::error("Expected ident", Span::new(4, 5)),
                Diagnostic::error("Unexpected eof", Span::new(7, 7)),
            ],
        };
        let message = err.to_string();
        assert!(message.starts_with("Parse error: Expected ident at 4..5"));
        assert!(message.contains("and 1 more"));
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn test_codegen_error_has_no_diagnostics() {
        let err = RewriteError::from(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
        assert!(err.to_string().contains("closed"));
        assert!(err.diagnostics().is_empty());
    }

    /// Test error types are Send + Sync so batch callers can move them across threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RewriteError>();
    }
}
