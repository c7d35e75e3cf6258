//! Named capturing groups for regex engines that only number them.
//!
//! [`NamedRegex`] analyses a pattern with `better-regex-patterns`, strips its
//! `(?<name>...)` annotations, compiles the rewritten pattern lazily and maps
//! each match's capture ranges back onto the group table, so captures can be
//! read by index or by name through a [`ResultsView`].
//!
//! The default engine is [`regex::Regex`]. Enabling the `lookaround` feature
//! adds [`FancyEngine`], backed by `fancy-regex`, for patterns that need
//! lookaround or backreferences.

mod engine;
mod error;
mod mapper;
mod named;
mod options;
mod results;

pub use better_regex_patterns::{
    AnalyzedPattern, GroupDefinition, GroupKind, GroupSpan, GroupTable, PatternError,
    PatternErrorInfo, analyze,
};
pub use engine::{CaptureRanges, Engine};
#[cfg(feature = "lookaround")]
pub use engine::FancyEngine;
pub use error::{EngineError, RegexError};
pub use mapper::map_match;
pub use named::NamedRegex;
pub use options::{MatchOptions, RegexOptions};
pub use results::{GroupKey, RegexResult, ResultsView};

/// A [`NamedRegex`] running on the backtracking [`FancyEngine`].
#[cfg(feature = "lookaround")]
pub type FancyRegex = NamedRegex<FancyEngine>;
