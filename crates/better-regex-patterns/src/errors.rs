//! Error types shared by the group analysis modules.

use std::fmt;
use thiserror::Error;

/// Location and description of a malformed group in a pattern.
///
/// # Examples
/// ```
/// use better_regex_patterns::PatternErrorInfo;
/// let info = PatternErrorInfo::new("unclosed group", 3);
/// assert_eq!(info.position, 3);
/// assert_eq!(info.to_string(), "unclosed group at byte 3 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternErrorInfo {
    /// Human-readable description of the problem.
    pub message: &'static str,
    /// Byte offset of the offending parenthesis.
    pub position: usize,
}

impl PatternErrorInfo {
    /// Create a new error description.
    #[must_use]
    pub const fn new(message: &'static str, position: usize) -> Self {
        Self { message, position }
    }
}

impl fmt::Display for PatternErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {} (zero-based)", self.message, self.position)
    }
}

/// Errors surfaced while scanning a pattern for groups.
///
/// Anything unrelated to group structure is left for the regex engine to
/// reject when the rewritten pattern is compiled.
///
/// # Examples
/// ```
/// use better_regex_patterns::{analyze, PatternError};
/// let err = analyze("(unclosed").unwrap_err();
/// assert!(matches!(err, PatternError::UnbalancedParenthesis(_)));
/// assert_eq!(err.info().position, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// An unescaped `(` was never closed, or a `)` had no opening partner.
    #[error("{0}")]
    UnbalancedParenthesis(PatternErrorInfo),
    /// A capturing group was opened inside another group.
    #[error("{0}")]
    NestedCapture(PatternErrorInfo),
}

impl PatternError {
    /// Access the position and message shared by every variant.
    #[must_use]
    pub const fn info(&self) -> &PatternErrorInfo {
        match self {
            Self::UnbalancedParenthesis(info) | Self::NestedCapture(info) => info,
        }
    }
}

pub(crate) const fn unclosed_group(position: usize) -> PatternError {
    PatternError::UnbalancedParenthesis(PatternErrorInfo::new(
        "unclosed group '(' in pattern",
        position,
    ))
}

pub(crate) const fn unmatched_close(position: usize) -> PatternError {
    PatternError::UnbalancedParenthesis(PatternErrorInfo::new(
        "unmatched closing parenthesis ')' in pattern",
        position,
    ))
}

pub(crate) const fn nested_capture(position: usize) -> PatternError {
    PatternError::NestedCapture(PatternErrorInfo::new(
        "capturing group nested inside another group is not supported",
        position,
    ))
}
