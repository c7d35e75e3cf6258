//! The seam between group bookkeeping and the regex engine that runs the
//! rewritten pattern.

#[cfg(feature = "lookaround")]
mod fancy;

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::EngineError;
use crate::options::{MatchOptions, RegexOptions};

#[cfg(feature = "lookaround")]
pub use fancy::FancyEngine;

/// Byte ranges of one match: index 0 is the whole match, later indices are
/// capturing groups in engine order. `None` marks a group that did not
/// participate.
pub type CaptureRanges = Vec<Option<Range<usize>>>;

/// A regex engine able to compile the rewritten pattern and report capture
/// ranges.
///
/// Compiled values are shared across threads by
/// [`NamedRegex`](crate::NamedRegex), so implementations must be safe to
/// search concurrently.
pub trait Engine: Sized + Send + Sync {
    /// Compile `pattern`, which contains no name annotations.
    ///
    /// # Errors
    /// Returns the engine's own error when the pattern is invalid.
    fn compile(pattern: &str, options: &RegexOptions) -> Result<Self, EngineError>;

    /// Number of capture slots, including the implicit whole-match group.
    fn captures_len(&self) -> usize;

    /// Find successive non-overlapping matches in `subject`.
    ///
    /// Every returned [`CaptureRanges`] has exactly
    /// [`captures_len`](Self::captures_len) entries.
    ///
    /// # Errors
    /// Returns the engine's error when the search itself fails, e.g. when a
    /// backtracking engine exceeds its step limit.
    fn execute(
        &self,
        subject: &str,
        options: &MatchOptions,
    ) -> Result<Vec<CaptureRanges>, EngineError>;
}

impl Engine for Regex {
    fn compile(pattern: &str, options: &RegexOptions) -> Result<Self, EngineError> {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(options.is_case_insensitive())
            .multi_line(options.is_multi_line())
            .dot_matches_new_line(options.is_dot_matches_new_line())
            .swap_greed(options.is_swap_greed())
            .crlf(options.is_crlf())
            .unicode(options.is_unicode());
        if let Some(limit) = options.program_size_limit() {
            builder.size_limit(limit);
        }
        builder.build().map_err(EngineError::from)
    }

    fn captures_len(&self) -> usize {
        Self::captures_len(self)
    }

    fn execute(
        &self,
        subject: &str,
        options: &MatchOptions,
    ) -> Result<Vec<CaptureRanges>, EngineError> {
        let anchored = options.is_anchored();
        Ok(self
            .captures_iter(subject)
            .take_while(|caps| !anchored || caps.get(0).is_some_and(|m| m.start() == 0))
            .take(options.max_matches().unwrap_or(usize::MAX))
            .map(|caps| caps.iter().map(|m| m.map(|m| m.range())).collect())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: &str, options: &RegexOptions) -> Regex {
        match <Regex as Engine>::compile(pattern, options) {
            Ok(regex) => regex,
            Err(err) => panic!("pattern should compile: {err}"),
        }
    }

    fn execute(regex: &Regex, subject: &str, options: &MatchOptions) -> Vec<CaptureRanges> {
        match Engine::execute(regex, subject, options) {
            Ok(matches) => matches,
            Err(err) => panic!("search should succeed: {err}"),
        }
    }

    #[test]
    fn reports_ranges_for_each_match() {
        let regex = compile(r"(\d)(x)?", &RegexOptions::new());
        let matches = execute(&regex, "1x 2", &MatchOptions::new());
        assert_eq!(
            matches,
            vec![
                vec![Some(0..2), Some(0..1), Some(1..2)],
                vec![Some(3..4), Some(3..4), None],
            ]
        );
    }

    #[test]
    fn captures_len_counts_whole_match() {
        let regex = compile("(a)(b)", &RegexOptions::new());
        assert_eq!(Engine::captures_len(&regex), 3);
    }

    #[test]
    fn applies_compile_options() {
        let regex = compile("abc", &RegexOptions::new().case_insensitive(true));
        assert_eq!(execute(&regex, "ABC", &MatchOptions::new()).len(), 1);
    }

    #[test]
    fn anchored_search_rejects_later_matches() {
        let regex = compile(r"\d", &RegexOptions::new());
        let anchored = MatchOptions::new().anchored(true);
        assert!(execute(&regex, "a1", &anchored).is_empty());
        assert_eq!(execute(&regex, "12", &anchored).len(), 1);
    }

    #[test]
    fn limit_caps_match_count() {
        let regex = compile(r"\d", &RegexOptions::new());
        let limited = MatchOptions::new().limit(Some(2));
        assert_eq!(execute(&regex, "12345", &limited).len(), 2);
    }

    #[test]
    fn surfaces_size_limit_errors() {
        let options = RegexOptions::new().size_limit(Some(16));
        let result = <Regex as Engine>::compile(r"\w{100}", &options);
        assert!(matches!(
            result,
            Err(EngineError::Regex(regex::Error::CompiledTooBig(_)))
        ));
    }
}
