//! Backtracking engine supporting lookaround and backreferences.

use super::{CaptureRanges, Engine};
use crate::error::EngineError;
use crate::options::{MatchOptions, RegexOptions};

/// [`Engine`] backed by [`fancy_regex::Regex`].
///
/// Compile options are applied as an inline flag prefix, so flags the
/// engine does not understand are rejected by its parser.
#[derive(Debug, Clone)]
pub struct FancyEngine {
    regex: fancy_regex::Regex,
}

impl FancyEngine {
    /// Access the underlying compiled expression.
    #[must_use]
    pub const fn as_regex(&self) -> &fancy_regex::Regex {
        &self.regex
    }
}

impl Engine for FancyEngine {
    fn compile(pattern: &str, options: &RegexOptions) -> Result<Self, EngineError> {
        let source = format!("{}{pattern}", options.inline_flags());
        let regex = fancy_regex::Regex::new(&source)?;
        Ok(Self { regex })
    }

    fn captures_len(&self) -> usize {
        self.regex.captures_len()
    }

    fn execute(
        &self,
        subject: &str,
        options: &MatchOptions,
    ) -> Result<Vec<CaptureRanges>, EngineError> {
        let limit = options.max_matches().unwrap_or(usize::MAX);
        let mut matches = Vec::new();
        for caps in self.regex.captures_iter(subject) {
            if matches.len() >= limit {
                break;
            }
            let caps = caps?;
            if options.is_anchored() && caps.get(0).is_none_or(|m| m.start() != 0) {
                break;
            }
            matches.push(
                (0..caps.len())
                    .map(|i| caps.get(i).map(|m| m.start()..m.end()))
                    .collect(),
            );
        }
        Ok(matches)
    }
}
