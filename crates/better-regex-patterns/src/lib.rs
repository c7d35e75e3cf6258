//! Group analysis for regular expressions with named capturing groups.
//!
//! The crate scans a pattern for its parenthesised groups, classifies each
//! one, extracts `(?<name>...)` annotations and rewrites the pattern without
//! them, so an engine that only understands numbered groups can compile it.
//! The resulting [`GroupTable`] records which capture index carries which
//! name. Analysis is a pure function of the pattern text; matching is left
//! to the caller's regex engine.

mod errors;
mod pattern;
mod table;

pub use errors::{PatternError, PatternErrorInfo};
pub use pattern::{
    AnalyzedPattern, GroupKind, analyze, classify_group, rewrite_pattern, scan_groups,
};
pub use table::{GroupDefinition, GroupSpan, GroupTable};
