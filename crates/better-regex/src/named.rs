//! Named-group patterns compiled lazily for an engine that only numbers
//! groups.

use std::fmt;
use std::sync::OnceLock;

use better_regex_patterns::{AnalyzedPattern, GroupDefinition, GroupTable, analyze};
use regex::Regex;

use crate::engine::Engine;
use crate::error::RegexError;
use crate::mapper::{check_alignment, map_match};
use crate::options::{MatchOptions, RegexOptions};
use crate::results::ResultsView;

/// A pattern whose named groups have been analysed and stripped, paired with
/// a lazily compiled engine.
///
/// Analysis runs eagerly in the constructor. The engine form is compiled on
/// first use and cached; the value is immutable afterwards and can be shared
/// across threads.
///
/// # Examples
/// ```
/// use better_regex::NamedRegex;
///
/// let regex = NamedRegex::new(r"(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})")
///     .expect("pattern is well formed");
/// assert_eq!(regex.rewritten(), r"(\d{4})-(\d{2})-(\d{2})");
///
/// let view = regex.captures("2024-05-01").expect("search succeeds");
/// assert_eq!(view.get("year"), Some("2024"));
/// assert_eq!(view.get("day"), Some("01"));
/// assert_eq!(view.get(0), Some("2024"));
/// ```
#[derive(Debug)]
pub struct NamedRegex<E = Regex> {
    source: String,
    analysis: AnalyzedPattern,
    options: RegexOptions,
    compiled: OnceLock<E>,
}

impl NamedRegex {
    /// Analyse `pattern` for the default [`regex`] engine.
    ///
    /// # Errors
    /// Returns [`RegexError::Pattern`] when the group structure is malformed.
    pub fn new(pattern: &str) -> Result<Self, RegexError> {
        Self::with_engine(pattern, RegexOptions::default())
    }

    /// Analyse `pattern` for the default engine with explicit options.
    ///
    /// # Errors
    /// Returns [`RegexError::Pattern`] when the group structure is malformed.
    pub fn with_options(pattern: &str, options: RegexOptions) -> Result<Self, RegexError> {
        Self::with_engine(pattern, options)
    }
}

impl<E: Engine> NamedRegex<E> {
    /// Analyse `pattern` for the engine `E`.
    ///
    /// # Errors
    /// Returns [`RegexError::Pattern`] when the group structure is malformed.
    pub fn with_engine(pattern: &str, options: RegexOptions) -> Result<Self, RegexError> {
        let analysis = analyze(pattern)?;
        log::debug!(
            "analysed pattern '{pattern}': {} capturing groups, rewritten to '{}'",
            analysis.groups().len(),
            analysis.rewritten()
        );
        Ok(Self {
            source: pattern.to_owned(),
            analysis,
            options,
            compiled: OnceLock::new(),
        })
    }

    /// Original pattern text, name annotations included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Pattern text handed to the engine.
    #[must_use]
    pub fn rewritten(&self) -> &str {
        self.analysis.rewritten()
    }

    /// Capturing groups in engine order.
    #[must_use]
    pub const fn groups(&self) -> &GroupTable {
        self.analysis.groups()
    }

    /// Group definition at a zero-based index.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&GroupDefinition> {
        self.groups().get(index)
    }

    /// Options used to compile the pattern.
    #[must_use]
    pub const fn options(&self) -> &RegexOptions {
        &self.options
    }

    /// Listing of the groups and the rewritten pattern for diagnostics.
    #[must_use]
    pub fn document(&self) -> String {
        self.analysis.document()
    }

    /// Compile the rewritten pattern, caching the engine.
    ///
    /// # Errors
    /// - [`RegexError::EngineCompile`] when the engine rejects the pattern.
    /// - [`RegexError::Alignment`] when the engine counts a different number
    ///   of capturing groups than the analysis found.
    ///
    /// # Notes
    /// - Idempotent: calls after a successful compilation return the cached
    ///   engine.
    /// - Thread-safe: concurrent first calls may each compile, but only the
    ///   first stored engine is kept and returned to every caller.
    pub fn compile(&self) -> Result<&E, RegexError> {
        if let Some(engine) = self.compiled.get() {
            return Ok(engine);
        }
        let engine =
            E::compile(self.rewritten(), &self.options).map_err(RegexError::EngineCompile)?;
        check_alignment(self.groups().len(), engine.captures_len().saturating_sub(1))?;
        log::debug!("compiled pattern '{}'", self.rewritten());
        Ok(self.compiled.get_or_init(|| engine))
    }

    /// Captures of the first match in `subject`.
    ///
    /// An empty view is returned when nothing matches.
    ///
    /// # Errors
    /// Propagates compilation, search and alignment failures.
    pub fn captures(&self, subject: &str) -> Result<ResultsView, RegexError> {
        self.captures_with(subject, MatchOptions::new())
    }

    /// Captures of the first match in `subject` under `options`.
    ///
    /// # Errors
    /// Propagates compilation, search and alignment failures.
    pub fn captures_with(
        &self,
        subject: &str,
        options: MatchOptions,
    ) -> Result<ResultsView, RegexError> {
        let mut views = self.captures_all_with(subject, options.limit(Some(1)))?;
        Ok(views.pop().unwrap_or_default())
    }

    /// Captures of every non-overlapping match in `subject`.
    ///
    /// # Errors
    /// Propagates compilation, search and alignment failures.
    pub fn captures_all(&self, subject: &str) -> Result<Vec<ResultsView>, RegexError> {
        self.captures_all_with(subject, MatchOptions::new())
    }

    /// Captures of the matches in `subject` selected by `options`.
    ///
    /// # Errors
    /// Propagates compilation, search and alignment failures.
    pub fn captures_all_with(
        &self,
        subject: &str,
        options: MatchOptions,
    ) -> Result<Vec<ResultsView>, RegexError> {
        let engine = self.compile()?;
        let matches = engine
            .execute(subject, &options)
            .map_err(RegexError::EngineExecute)?;
        matches
            .iter()
            .map(|ranges| map_match(subject, ranges, self.groups()))
            .collect()
    }
}

impl<E> fmt::Display for NamedRegex<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
