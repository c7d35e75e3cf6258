//! Compile-time and match-time options.

/// Flags applied when the rewritten pattern is compiled.
///
/// # Examples
/// ```
/// use better_regex::RegexOptions;
///
/// let options = RegexOptions::new().case_insensitive(true).multi_line(true);
/// assert!(options.is_case_insensitive());
/// assert_eq!(options.inline_flags(), "(?im)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag maps to one independent engine switch"
)]
pub struct RegexOptions {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    swap_greed: bool,
    crlf: bool,
    unicode: bool,
    size_limit: Option<usize>,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexOptions {
    /// Options matching the engine defaults: Unicode on, everything else off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            swap_greed: false,
            crlf: false,
            unicode: true,
            size_limit: None,
        }
    }

    /// Match letters regardless of case (`i`).
    #[must_use]
    pub const fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Let `^` and `$` match at line boundaries (`m`).
    #[must_use]
    pub const fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Let `.` match `\n` (`s`).
    #[must_use]
    pub const fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Make quantifiers lazy by default and `?`-suffixed ones greedy (`U`).
    #[must_use]
    pub const fn swap_greed(mut self, yes: bool) -> Self {
        self.swap_greed = yes;
        self
    }

    /// Treat `\r\n` as a line terminator in multi-line mode (`R`).
    #[must_use]
    pub const fn crlf(mut self, yes: bool) -> Self {
        self.crlf = yes;
        self
    }

    /// Enable Unicode-aware classes and case folding (`u`).
    #[must_use]
    pub const fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    /// Cap the size of the compiled program, in bytes.
    #[must_use]
    pub const fn size_limit(mut self, limit: Option<usize>) -> Self {
        self.size_limit = limit;
        self
    }

    /// Whether case-insensitive matching is enabled.
    #[must_use]
    pub const fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether multi-line anchors are enabled.
    #[must_use]
    pub const fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    /// Whether `.` matches newlines.
    #[must_use]
    pub const fn is_dot_matches_new_line(&self) -> bool {
        self.dot_matches_new_line
    }

    /// Whether greediness is swapped.
    #[must_use]
    pub const fn is_swap_greed(&self) -> bool {
        self.swap_greed
    }

    /// Whether CRLF line terminators are recognised.
    #[must_use]
    pub const fn is_crlf(&self) -> bool {
        self.crlf
    }

    /// Whether Unicode mode is enabled.
    #[must_use]
    pub const fn is_unicode(&self) -> bool {
        self.unicode
    }

    /// The configured program size limit, if any.
    #[must_use]
    pub const fn program_size_limit(&self) -> Option<usize> {
        self.size_limit
    }

    /// Render the flags as an inline group such as `(?is-u)`.
    ///
    /// Returns an empty string when every flag is at its default. Engines
    /// configured through pattern text prepend this to the rewritten
    /// pattern; inline flag groups never consume a capture index.
    #[must_use]
    pub fn inline_flags(&self) -> String {
        let enabled = [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.swap_greed, 'U'),
            (self.crlf, 'R'),
        ];
        let mut flags: String = enabled
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, flag)| *flag)
            .collect();
        if !self.unicode {
            flags.push_str("-u");
        }
        if flags.is_empty() {
            flags
        } else {
            format!("(?{flags})")
        }
    }
}

/// Options applied when searching a subject string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    anchored: bool,
    limit: Option<usize>,
}

impl MatchOptions {
    /// Report every match anywhere in the subject.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            anchored: false,
            limit: None,
        }
    }

    /// Only report a match that starts at the beginning of the subject.
    #[must_use]
    pub const fn anchored(mut self, yes: bool) -> Self {
        self.anchored = yes;
        self
    }

    /// Stop after `limit` matches.
    #[must_use]
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Whether matches must start at offset zero.
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Maximum number of matches to report.
    #[must_use]
    pub const fn max_matches(&self) -> Option<usize> {
        self.limit
    }
}
