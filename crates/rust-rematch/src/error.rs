//! Error types for rust-rematch.
//!
//! Compiling a pattern is the only fallible matching operation: a subject
//! that contains no match is a normal outcome and is reported through empty
//! results, never through an error. The remaining variants cover loading
//! configuration and scripts.

use thiserror::Error;

/// Format an invalid pattern error, pointing at the offending position.
fn format_invalid_pattern(pattern: &str, message: &str, position: Option<usize>) -> String {
    let Some(position) = position else {
        return format!("invalid pattern '{pattern}': {message}");
    };

    // Byte offsets are reported; the caret is placed by code point.
    let column = pattern
        .get(..position)
        .map_or(position, |prefix| prefix.chars().count());

    format!(
        "invalid pattern at position {position}: {message}\n\
         \n\
         │ {pattern}\n\
         │ {caret:>width$}",
        caret = "^",
        width = column + 1,
    )
}

/// The main error type for rust-rematch operations.
#[derive(Debug, Error)]
pub enum RematchError {
    /// The pattern source is not a valid regular expression.
    #[error("{}", format_invalid_pattern(pattern, message, *position))]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// What the engine rejected.
        message: String,
        /// Byte offset of the syntax error, when the parser reports one.
        position: Option<usize>,
    },

    /// Configuration or script error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for rust-rematch operations.
pub type Result<T> = std::result::Result<T, RematchError>;

impl RematchError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(
        pattern: impl Into<String>,
        message: impl Into<String>,
        position: Option<usize>,
    ) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
            position,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Check if this is an invalid pattern error.
    #[must_use]
    pub const fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. })
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get the offending pattern source, if this is an invalid pattern error.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// Get the syntax error position, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidPattern { position, .. } => *position,
            _ => None,
        }
    }
}
