//! Per-match results addressable by capture index or group name.

use std::fmt;

/// Key used to look up a capture: a zero-based index or a group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey<'a> {
    /// Zero-based position among the capturing groups.
    Index(usize),
    /// Name given by a `(?<name>...)` annotation.
    Name(&'a str),
}

impl From<usize> for GroupKey<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for GroupKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

/// The text captured by one group in one match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegexResult {
    group_index: usize,
    matching_text: Option<String>,
    group_name: Option<String>,
}

impl RegexResult {
    pub(crate) const fn new(
        group_index: usize,
        matching_text: Option<String>,
        group_name: Option<String>,
    ) -> Self {
        Self {
            group_index,
            matching_text,
            group_name,
        }
    }

    /// One-based engine capture index; zero is the whole match and is never
    /// reported.
    #[must_use]
    pub const fn group_index(&self) -> usize {
        self.group_index
    }

    /// Captured text, or `None` when the group did not participate.
    #[must_use]
    pub fn matching_text(&self) -> Option<&str> {
        self.matching_text.as_deref()
    }

    /// Name of the group, if it was annotated.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Whether the group carries a name.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        self.group_name.is_some()
    }
}

impl fmt::Display for RegexResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {}", self.group_index)?;
        if let Some(name) = &self.group_name {
            write!(f, " aka \"{name}\"")?;
        }
        write!(f, ": {}", self.matching_text().unwrap_or_default())
    }
}

/// Read-only view over the captures of a single match.
///
/// Lookups that miss, whether by unknown name, out-of-range index or a group
/// that did not participate, return `None`. A subject that did not match
/// yields an empty view.
///
/// # Examples
/// ```
/// use better_regex::NamedRegex;
///
/// let regex = NamedRegex::new(r"(?<key>\w+)=(\w+)").expect("pattern is well formed");
/// let view = regex.captures("colour=blue").expect("search succeeds");
/// assert_eq!(view.get("key"), Some("colour"));
/// assert_eq!(view.get(1), Some("blue"));
/// assert_eq!(view.get("value"), None);
/// assert_eq!(view.to_string(), "Group 1 aka \"key\": colour\nGroup 2: blue");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResultsView {
    results: Vec<RegexResult>,
}

impl ResultsView {
    pub(crate) const fn new(results: Vec<RegexResult>) -> Self {
        Self { results }
    }

    /// Captured text for a zero-based index or a name.
    ///
    /// With duplicate names the first group wins.
    #[must_use]
    pub fn get<'k>(&self, key: impl Into<GroupKey<'k>>) -> Option<&str> {
        self.result(key)?.matching_text()
    }

    /// Full result entry for a zero-based index or a name.
    #[must_use]
    pub fn result<'k>(&self, key: impl Into<GroupKey<'k>>) -> Option<&RegexResult> {
        match key.into() {
            GroupKey::Index(index) => self.results.get(index),
            GroupKey::Name(name) => self
                .results
                .iter()
                .find(|result| result.group_name() == Some(name)),
        }
    }

    /// Number of capturing groups in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the view holds no captures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Names of the named groups, in pattern order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().filter_map(RegexResult::group_name)
    }

    /// Iterate over the results in capture order.
    pub fn iter(&self) -> std::slice::Iter<'_, RegexResult> {
        self.results.iter()
    }

    /// Render one line per capture, e.g. `Group 1 aka "year": 2024`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, result) in self.results.iter().enumerate() {
            if position > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{result}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ResultsView {
    type Item = &'a RegexResult;
    type IntoIter = std::slice::Iter<'a, RegexResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl IntoIterator for ResultsView {
    type Item = RegexResult;
    type IntoIter = std::vec::IntoIter<RegexResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
