//! Error types for compiling and matching named-group patterns.

use std::fmt;
use std::ops::Range;

use better_regex_patterns::PatternError;
use thiserror::Error;

/// An error reported by the regex engine itself.
///
/// The engine's error is kept intact so callers can inspect it.
#[derive(Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// Raised by the [`regex`] crate.
    Regex(regex::Error),
    /// Raised by the `fancy-regex` crate.
    #[cfg(feature = "lookaround")]
    Fancy(fancy_regex::Error),
}

impl From<regex::Error> for EngineError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err)
    }
}

#[cfg(feature = "lookaround")]
impl From<fancy_regex::Error> for EngineError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regex(err) => fmt::Display::fmt(err, f),
            #[cfg(feature = "lookaround")]
            Self::Fancy(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Regex(err) => Some(err),
            #[cfg(feature = "lookaround")]
            Self::Fancy(err) => Some(err),
        }
    }
}

/// Errors surfaced while analysing, compiling or matching a pattern.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegexError {
    /// The pattern's group structure is malformed.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// The engine rejected the rewritten pattern.
    #[error(transparent)]
    EngineCompile(EngineError),
    /// The engine failed while searching the subject text.
    #[error("regex engine failed while matching: {0}")]
    EngineExecute(#[source] EngineError),
    /// The group table and the engine disagree on the number of capturing
    /// groups. This points at a defect in group analysis rather than bad
    /// input.
    #[error(
        "group table lists {table} capturing groups but the engine reports {engine}; \
         capture indices would be misattributed"
    )]
    Alignment {
        /// Length of the group table.
        table: usize,
        /// Capturing groups reported by the engine, excluding the whole match.
        engine: usize,
    },
    /// The engine reported a capture range that does not slice the subject,
    /// either out of bounds or off a character boundary.
    #[error(
        "engine reported capture range {range:?} for group {group}, which does not \
         slice a subject of {subject_len} bytes"
    )]
    InvalidCaptureRange {
        /// One-based engine capture index.
        group: usize,
        /// The offending byte range.
        range: Range<usize>,
        /// Byte length of the subject text.
        subject_len: usize,
    },
}
